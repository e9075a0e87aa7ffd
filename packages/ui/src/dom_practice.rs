use dioxus::prelude::*;
use state::PracticeList;

use crate::icons::{FaPlus, FaTrashCan};
use crate::Icon;

/// Practice widget: add colored items, click one to remove it, or clear all.
#[component]
pub fn DomPractice() -> Element {
    let mut list = use_signal(PracticeList::new);

    rsx! {
        div {
            class: "card dom-practice",
            h1 { "Modicicador del DOM" }
            div {
                class: "dialog-actions",
                button {
                    class: "primary",
                    onclick: move |_| {
                        list.write().add();
                    },
                    Icon { icon: FaPlus, width: 12, height: 12 }
                    " Add element to DOM"
                }
                button {
                    class: "secondary",
                    onclick: move |_| list.write().clear(),
                    Icon { icon: FaTrashCan, width: 12, height: 12 }
                    " Clear DOM"
                }
            }
            div {
                class: "practice-items",
                for (index, item) in list.read().items().iter().enumerate() {
                    div {
                        key: "{item.uid}",
                        class: "practice-item",
                        style: "background-color: {item.color}",
                        title: "{item.color}",
                        onclick: {
                            let uid = item.uid;
                            move |_: MouseEvent| list.write().remove(uid)
                        },
                        "{PracticeList::label(index)}"
                    }
                }
            }
        }
    }
}
