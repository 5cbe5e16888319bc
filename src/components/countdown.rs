use std::cell::Cell;
use std::rc::Rc;

use yew::prelude::*;

pub const OFFER_WINDOW_HOURS: u32 = 24;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct OfferCountdown {
    pub hours: u32,
    pub minutes: u32,
    pub seconds: u32,
}

impl OfferCountdown {
    pub fn start() -> Self {
        Self {
            hours: OFFER_WINDOW_HOURS,
            minutes: 0,
            seconds: 0,
        }
    }

    // A clock already at zero rolls back to the full window instead of
    // going negative.
    pub fn tick(self) -> Self {
        if self.hours == 0 && self.minutes == 0 && self.seconds == 0 {
            return Self::start();
        }

        let mut hours = self.hours;
        let mut minutes = self.minutes;
        let mut seconds = self.seconds;

        if seconds == 0 {
            seconds = 59;
            if minutes == 0 {
                minutes = 59;
                hours -= 1;
            } else {
                minutes -= 1;
            }
        } else {
            seconds -= 1;
        }

        Self {
            hours,
            minutes,
            seconds,
        }
    }
}

fn two_digits(value: u32) -> String {
    format!("{:02}", value)
}

#[function_component(CountdownBanner)]
pub fn countdown_banner() -> Html {
    let remaining = use_state(OfferCountdown::start);

    {
        let setter = remaining.setter();
        use_effect_with_deps(
            move |_| {
                // The interval closure owns the clock. Reading the state
                // handle from inside the closure would see the mount-time
                // value on every tick, so the handle only pushes frames out.
                let clock = Rc::new(Cell::new(OfferCountdown::start()));
                let interval = gloo_timers::callback::Interval::new(1_000, move || {
                    let next = clock.get().tick();
                    clock.set(next);
                    setter.set(next);
                });

                move || drop(interval)
            },
            (),
        );
    }

    html! {
        <div class="countdown-banner">
            <span class="countdown-label">{"Oferta especial termina en:"}</span>
            <div class="countdown-clock">
                <div class="countdown-cell">{format!("{}h", two_digits(remaining.hours))}</div>
                <span>{":"}</span>
                <div class="countdown-cell">{format!("{}m", two_digits(remaining.minutes))}</div>
                <span>{":"}</span>
                <div class="countdown-cell">{format!("{}s", two_digits(remaining.seconds))}</div>
            </div>
            <style>
                {r#"
                .countdown-banner {
                    position: sticky;
                    top: 0;
                    z-index: 50;
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    gap: 1rem;
                    padding: 0.5rem 1rem;
                    background: #10b981;
                    color: #ffffff;
                    font-weight: 700;
                    font-size: 0.875rem;
                    text-align: center;
                    box-shadow: 0 2px 8px rgba(15, 23, 42, 0.15);
                }

                .countdown-label {
                    text-transform: uppercase;
                    letter-spacing: 0.08em;
                }

                .countdown-clock {
                    display: flex;
                    align-items: center;
                    gap: 0.5rem;
                    font-family: ui-monospace, 'SF Mono', monospace;
                    font-size: 1.125rem;
                }

                .countdown-cell {
                    padding: 0.25rem 0.5rem;
                    border-radius: 0.375rem;
                    background: rgba(255, 255, 255, 0.2);
                }

                @media (max-width: 640px) {
                    .countdown-label {
                        display: none;
                    }
                }
                "#}
            </style>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use test_case::test_case;

    const FULL_WINDOW_SECONDS: u32 = OFFER_WINDOW_HOURS * 3_600;

    fn total_seconds(clock: OfferCountdown) -> u32 {
        clock.hours * 3_600 + clock.minutes * 60 + clock.seconds
    }

    fn after_ticks(n: u32) -> OfferCountdown {
        let mut clock = OfferCountdown::start();
        for _ in 0..n {
            clock = clock.tick();
        }
        clock
    }

    #[test_case(24, 0, 0 => (23, 59, 59) ; "first tick borrows through minutes and hours")]
    #[test_case(23, 59, 59 => (23, 59, 58) ; "plain second decrement")]
    #[test_case(12, 30, 0 => (12, 29, 59) ; "minute borrow")]
    #[test_case(1, 0, 0 => (0, 59, 59) ; "hour borrow")]
    #[test_case(0, 0, 1 => (0, 0, 0) ; "counts down to zero")]
    #[test_case(0, 0, 0 => (24, 0, 0) ; "zero rolls back to the full window")]
    fn tick_cases(hours: u32, minutes: u32, seconds: u32) -> (u32, u32, u32) {
        let next = OfferCountdown {
            hours,
            minutes,
            seconds,
        }
        .tick();
        (next.hours, next.minutes, next.seconds)
    }

    #[test]
    fn tick_handles_every_displayable_state() {
        for hours in 0..=OFFER_WINDOW_HOURS {
            for minutes in 0..60 {
                for seconds in 0..60 {
                    let clock = OfferCountdown {
                        hours,
                        minutes,
                        seconds,
                    };
                    let next = clock.tick();
                    assert!(next.hours <= OFFER_WINDOW_HOURS);
                    assert!(next.minutes < 60);
                    assert!(next.seconds < 60);
                    if total_seconds(clock) == 0 {
                        assert_eq!(next, OfferCountdown::start());
                    } else {
                        assert_eq!(total_seconds(next), total_seconds(clock) - 1);
                    }
                }
            }
        }
    }

    #[test]
    fn window_repeats_after_a_full_cycle_plus_the_reset_tick() {
        // 86400 ticks reach 0:0:0; the reset itself consumes one more tick.
        assert_eq!(after_ticks(FULL_WINDOW_SECONDS), OfferCountdown {
            hours: 0,
            minutes: 0,
            seconds: 0,
        });
        assert_eq!(after_ticks(FULL_WINDOW_SECONDS + 1), OfferCountdown::start());
    }

    #[test]
    fn fields_render_zero_padded() {
        assert_eq!(two_digits(0), "00");
        assert_eq!(two_digits(5), "05");
        assert_eq!(two_digits(24), "24");
        assert_eq!(two_digits(59), "59");
    }

    proptest! {
        #[test]
        fn remaining_time_falls_one_second_per_tick(n in 0u32..=FULL_WINDOW_SECONDS) {
            prop_assert_eq!(total_seconds(after_ticks(n)), FULL_WINDOW_SECONDS - n);
        }

        #[test]
        fn clock_fields_stay_displayable(n in 0u32..=(2 * FULL_WINDOW_SECONDS)) {
            let clock = after_ticks(n);
            prop_assert!(clock.hours <= OFFER_WINDOW_HOURS);
            prop_assert!(clock.minutes < 60);
            prop_assert!(clock.seconds < 60);
            prop_assert_eq!(two_digits(clock.minutes).len(), 2);
            prop_assert_eq!(two_digits(clock.seconds).len(), 2);
        }
    }
}
