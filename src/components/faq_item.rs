use gloo_timers::callback::Timeout;
use web_sys::MouseEvent;
use yew::prelude::*;
use yew::{Children, Properties};

// Keep in step with the `answer-close` keyframes in the landing page styles.
pub const COLLAPSE_MS: u32 = 350;

// `Closing` keeps the answer rendered while the exit animation plays.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DisclosurePhase {
    Closed,
    Open,
    Closing,
}

impl DisclosurePhase {
    // Reopening during a collapse goes straight back to `Open`.
    pub fn toggled(self) -> Self {
        match self {
            DisclosurePhase::Closed | DisclosurePhase::Closing => DisclosurePhase::Open,
            DisclosurePhase::Open => DisclosurePhase::Closing,
        }
    }

    // A stale completion landing outside `Closing` changes nothing.
    pub fn collapsed(self) -> Self {
        match self {
            DisclosurePhase::Closing => DisclosurePhase::Closed,
            other => other,
        }
    }

    pub fn is_open(self) -> bool {
        matches!(self, DisclosurePhase::Open)
    }

    pub fn renders_answer(self) -> bool {
        matches!(self, DisclosurePhase::Open | DisclosurePhase::Closing)
    }
}

#[derive(Properties, PartialEq)]
pub struct FaqItemProps {
    pub question: String,
    pub children: Children,
}

#[function_component(FaqItem)]
pub fn faq_item(props: &FaqItemProps) -> Html {
    let phase = use_state(|| DisclosurePhase::Closed);
    // One armed collapse timer at most. The handle survives re-renders here;
    // dropping it cancels the scheduled collapse.
    let pending_collapse = use_mut_ref(|| None::<Timeout>);

    let toggle = {
        let phase = phase.clone();
        let pending_collapse = pending_collapse.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            if let Some(timeout) = pending_collapse.borrow_mut().take() {
                drop(timeout);
            }
            let next = phase.toggled();
            if next == DisclosurePhase::Closing {
                let setter = phase.setter();
                // If this fires, no click cancelled it, so the phase is
                // still `Closing` and the answer can come out of the tree.
                *pending_collapse.borrow_mut() = Some(Timeout::new(COLLAPSE_MS, move || {
                    setter.set(next.collapsed());
                }));
            }
            phase.set(next);
        })
    };

    html! {
        <div class={classes!("faq-item", if phase.is_open() { "open" } else { "" })}>
            <button class="faq-question" onclick={toggle}>
                <span class="question-text">{&props.question}</span>
                <i class="fa-solid fa-chevron-down faq-chevron"></i>
            </button>
            {
                if phase.renders_answer() {
                    let motion = if phase.is_open() { "opening" } else { "closing" };
                    html! {
                        <div class={classes!("faq-answer", motion)}>
                            <div class="faq-answer-body">
                                { for props.children.iter() }
                            </div>
                        </div>
                    }
                } else {
                    html! {}
                }
            }
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use proptest::prelude::*;

    // Mirror of the widget wiring: `pending` stands in for the armed
    // collapse timer, which a click always disarms before moving.
    #[derive(Clone, Copy, Debug, PartialEq, Eq)]
    struct Disclosure {
        phase: DisclosurePhase,
        pending: bool,
    }

    impl Disclosure {
        fn new() -> Self {
            Self {
                phase: DisclosurePhase::Closed,
                pending: false,
            }
        }

        fn click(&mut self) {
            let next = self.phase.toggled();
            self.pending = next == DisclosurePhase::Closing;
            self.phase = next;
        }

        fn settle(&mut self) {
            if self.pending {
                self.pending = false;
                self.phase = self.phase.collapsed();
            }
        }
    }

    #[test]
    fn collapse_completion_only_moves_closing() {
        assert_eq!(DisclosurePhase::Closing.collapsed(), DisclosurePhase::Closed);
        assert_eq!(DisclosurePhase::Open.collapsed(), DisclosurePhase::Open);
        assert_eq!(DisclosurePhase::Closed.collapsed(), DisclosurePhase::Closed);
    }

    #[test]
    fn starts_closed_with_no_answer_rendered() {
        let disclosure = Disclosure::new();
        assert!(!disclosure.phase.is_open());
        assert!(!disclosure.phase.renders_answer());
    }

    #[test]
    fn answer_stays_rendered_through_the_collapse_then_leaves() {
        let mut disclosure = Disclosure::new();
        disclosure.click();
        assert_eq!(disclosure.phase, DisclosurePhase::Open);

        disclosure.click();
        assert_eq!(disclosure.phase, DisclosurePhase::Closing);
        assert!(disclosure.phase.renders_answer());
        assert!(!disclosure.phase.is_open());

        disclosure.settle();
        assert_eq!(disclosure.phase, DisclosurePhase::Closed);
        assert!(!disclosure.phase.renders_answer());
    }

    #[test]
    fn reopening_mid_collapse_disarms_the_removal() {
        let mut disclosure = Disclosure::new();
        disclosure.click();
        disclosure.click();
        assert_eq!(disclosure.phase, DisclosurePhase::Closing);

        disclosure.click();
        assert_eq!(disclosure.phase, DisclosurePhase::Open);

        // The timer scheduled by the second click was disarmed by the third,
        // so nothing settles the answer out from under the reopened item.
        disclosure.settle();
        assert_eq!(disclosure.phase, DisclosurePhase::Open);
        assert!(disclosure.phase.renders_answer());
    }

    #[test]
    fn items_toggle_independently() {
        let mut items = vec![Disclosure::new(); 4];

        items[1].click();
        items[3].click();
        items[3].click();
        items[3].settle();

        assert!(!items[0].phase.renders_answer());
        assert!(items[1].phase.is_open());
        assert!(!items[2].phase.renders_answer());
        assert!(!items[3].phase.renders_answer());
    }

    proptest! {
        // Settling collapse timers between clicks never flips an item
        // against its click parity.
        #[test]
        fn open_state_follows_click_parity(ops in proptest::collection::vec(any::<bool>(), 0..64)) {
            let mut disclosure = Disclosure::new();
            let mut clicks = 0u32;
            for op in ops {
                if op {
                    disclosure.click();
                    clicks += 1;
                } else {
                    disclosure.settle();
                }
            }
            prop_assert_eq!(disclosure.phase.is_open(), clicks % 2 == 1);
        }

        // Once every timer has settled, an even number of clicks leaves no
        // answer in the tree and an odd number leaves it fully open.
        #[test]
        fn settled_state_matches_click_parity(clicks in 0u32..32) {
            let mut disclosure = Disclosure::new();
            for _ in 0..clicks {
                disclosure.click();
                disclosure.settle();
            }
            if clicks % 2 == 1 {
                prop_assert_eq!(disclosure.phase, DisclosurePhase::Open);
            } else {
                prop_assert_eq!(disclosure.phase, DisclosurePhase::Closed);
                prop_assert!(!disclosure.phase.renders_answer());
            }
        }
    }
}
