use chrono::{DateTime, Utc};
use gloo_timers::callback::Interval;
use yew::prelude::*;

use crate::components::cards::TimeBox;
use crate::config;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Elapsed {
    pub days: i64,
    pub hours: i64,
    pub minutes: i64,
    pub seconds: i64,
}

impl Elapsed {
    /// Time from `from` to `to`, floored at zero.
    pub fn between(from: DateTime<Utc>, to: DateTime<Utc>) -> Elapsed {
        let total = (to - from).num_seconds().max(0);
        Elapsed {
            days: total / 86_400,
            hours: (total % 86_400) / 3_600,
            minutes: (total % 3_600) / 60,
            seconds: total % 60,
        }
    }
}

pub fn pad2(n: i64) -> String {
    format!("{:02}", n)
}

/// Live count of how long we've been together, ticking every second.
#[function_component]
pub fn TogetherTimer() -> Html {
    let now = use_state(Utc::now);

    {
        let now = now.clone();
        use_effect_with_deps(
            move |_| {
                let interval = Interval::new(1_000, move || now.set(Utc::now()));
                move || drop(interval)
            },
            (),
        );
    }

    let elapsed = Elapsed::between(config::together_since(), *now);

    html! {
        <div class="together-timer">
            <TimeBox label="дней" value={elapsed.days.to_string()} />
            <TimeBox label="часов" value={pad2(elapsed.hours)} />
            <TimeBox label="минут" value={pad2(elapsed.minutes)} />
            <TimeBox label="секунд" value={pad2(elapsed.seconds)} />
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone};

    #[test]
    fn test_elapsed_splits_into_parts() {
        let from = Utc.with_ymd_and_hms(2025, 7, 14, 5, 44, 0).unwrap();
        let to = from + Duration::days(3) + Duration::hours(4) + Duration::minutes(5) + Duration::seconds(6);
        assert_eq!(
            Elapsed::between(from, to),
            Elapsed { days: 3, hours: 4, minutes: 5, seconds: 6 }
        );
    }

    #[test]
    fn test_elapsed_never_negative() {
        let from = Utc.with_ymd_and_hms(2025, 7, 14, 5, 44, 0).unwrap();
        let before = from - Duration::hours(1);
        assert_eq!(
            Elapsed::between(from, before),
            Elapsed { days: 0, hours: 0, minutes: 0, seconds: 0 }
        );
    }

    #[test]
    fn test_pad2() {
        assert_eq!(pad2(7), "07");
        assert_eq!(pad2(42), "42");
    }
}
