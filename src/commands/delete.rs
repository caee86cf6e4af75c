use anyhow::{Context, Result};
use daybook_core::store::EventStore;
use owo_colors::OwoColorize;

pub fn run(store: &mut impl EventStore, id: &str) -> Result<()> {
    let title = store
        .list()?
        .into_iter()
        .find(|e| e.id == id)
        .map(|e| e.title)
        .with_context(|| format!("일정을 찾을 수 없습니다: {}", id))?;

    store.delete(id)?;
    let remaining = store.list()?.len();

    println!("{}", format!("  일정이 삭제되었습니다: {}", title).red());
    println!("{}", format!("  (남은 일정 {}개)", remaining).dimmed());

    Ok(())
}
