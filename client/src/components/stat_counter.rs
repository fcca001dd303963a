//! Headline number that counts up the first time it scrolls into view.

use leptos::prelude::*;

use crate::content::company::Stat;
use crate::util::animation::StatCounter;
use crate::util::timer::use_interval;

#[cfg(feature = "hydrate")]
use crate::util::{scroll::observe_first_visible, viewport::Subscription};

/// Fraction of the card that must be visible before counting starts.
#[cfg(feature = "hydrate")]
const VISIBLE_THRESHOLD: f64 = 0.3;

#[component]
pub fn StatCounterCard(stat: Stat) -> impl IntoView {
    let counter = RwSignal::new(StatCounter::new(stat.value));
    let visible = RwSignal::new(false);
    let card_ref = NodeRef::<leptos::html::Div>::new();

    #[cfg(feature = "hydrate")]
    {
        let observer = StoredValue::new_local(None::<Subscription>);
        Effect::new(move || {
            let Some(card) = card_ref.get() else {
                return;
            };
            if observer.with_value(Option::is_some) {
                return;
            }
            let subscription = observe_first_visible(&card, VISIBLE_THRESHOLD, move || visible.set(true));
            observer.set_value(Some(subscription));
        });
        on_cleanup(move || {
            observer.try_update_value(|slot| {
                if let Some(mut subscription) = slot.take() {
                    subscription.cancel();
                }
            });
        });
    }

    Effect::new(move || {
        if !visible.get() {
            return;
        }
        let mut first = false;
        counter.update(|c| first = c.start());
        if !first {
            return;
        }
        let period = counter.with_untracked(StatCounter::tick_interval_ms);
        use_interval(period, move || {
            counter.update(|c| {
                c.tick();
            });
            !counter.with_untracked(StatCounter::is_done)
        });
    });

    view! {
        <div class="stat-card" node_ref=card_ref>
            <span class="stat-card__value">
                {move || counter.with(StatCounter::current)}
                <span class="stat-card__suffix">{stat.suffix}</span>
            </span>
            <span class="stat-card__label">{stat.label}</span>
        </div>
    }
}
