//! Request tickets: only the newest request of a kind may apply its result.

/// Handed out when a request starts, presented back when it completes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Ticket(u64);

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Tickets {
    issued: u64,
    closed: bool,
}

impl Tickets {
    /// Start a request. Every earlier ticket becomes stale.
    pub fn issue(&mut self) -> Ticket {
        self.issued += 1;
        self.closed = false;
        Ticket(self.issued)
    }

    pub fn is_current(&self, ticket: Ticket) -> bool {
        !self.closed && ticket.0 == self.issued
    }

    pub fn is_closed(&self) -> bool {
        self.closed
    }

    /// The owner went away; nothing outstanding may apply any more.
    pub fn close(&mut self) {
        self.closed = true;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_newer_ticket_supersedes_older() {
        let mut tickets = Tickets::default();
        let first = tickets.issue();
        let second = tickets.issue();
        assert!(!tickets.is_current(first));
        assert!(tickets.is_current(second));
    }

    #[test]
    fn test_closing_invalidates_outstanding_ticket() {
        let mut tickets = Tickets::default();
        let t = tickets.issue();
        tickets.close();
        assert!(!tickets.is_current(t));
        let next = tickets.issue();
        assert!(tickets.is_current(next));
    }
}
