use std::time::Duration;

use anyhow::Result;
use daybook_core::clock::Clock;
use daybook_core::notification::{Notification, Notifier};
use daybook_core::store::{EventStore, NotifiedFile};
use owo_colors::OwoColorize;

use crate::render::Render;

/// Check for due reminders every `interval` until Ctrl-C.
pub async fn run(
    store: &impl EventStore,
    notified: &NotifiedFile,
    clock: &impl Clock,
    interval: Duration,
) -> Result<()> {
    println!(
        "{}",
        format!(
            "{}마다 알림을 확인합니다. 종료하려면 Ctrl-C를 누르세요.",
            humanize(interval)
        )
        .dimmed()
    );

    let mut notifier = Notifier::with_notified(notified.load()?);
    let mut ticker = tokio::time::interval(interval);

    loop {
        tokio::select! {
            _ = ticker.tick() => {
                match poll(store, notified, &mut notifier, clock) {
                    Ok(fired) => {
                        for notification in &fired {
                            println!("{}", notification.render());
                        }
                    }
                    // Keep watching; the events file may be mid-edit
                    Err(e) => tracing::warn!(error = %e, "reminder check failed"),
                }
            }
            _ = tokio::signal::ctrl_c() => {
                println!();
                let pending = notifier.notifications();
                if !pending.is_empty() {
                    println!("{}", format!("시작 전인 알림 {}개:", pending.len()).bold());
                    for notification in pending {
                        println!("  {}", notification.render());
                    }
                }
                println!("{}", "알림 확인을 종료했습니다.".dimmed());
                break;
            }
        }
    }

    Ok(())
}

/// One check: fire due reminders, remember them on disk and drop the
/// notifications whose event has started.
fn poll(
    store: &impl EventStore,
    notified: &NotifiedFile,
    notifier: &mut Notifier,
    clock: &impl Clock,
) -> Result<Vec<Notification>> {
    let events = store.list()?;

    let fired = notifier.tick(&events, clock);
    if !fired.is_empty() {
        notified.save(notifier.notified_ids())?;
    }

    for notification in notifier.dismiss_started(&events, clock.now()) {
        tracing::debug!(id = %notification.id, "event started, reminder dismissed");
    }

    Ok(fired)
}

fn humanize(interval: Duration) -> String {
    humantime::format_duration(interval).to_string()
}
