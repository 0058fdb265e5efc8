use crate::commands::helpers::engine_for;
use crate::commands::{CmdResult, SessionStep, WidgetView};
use crate::error::Result;
use crate::events::{parse_script, Session};
use crate::model::CollectionKind;
use crate::store::ItemSource;

/// Replays an event script against a freshly loaded widget. The script is
/// parsed up front so a typo fails before anything is rendered.
pub fn run<S: ItemSource>(source: &S, kind: CollectionKind, script: &str) -> Result<CmdResult> {
    let events = parse_script(script)?;

    let mut result = CmdResult::default();
    let engine = engine_for(source, kind, &mut result);
    let mut session = Session::new(engine);

    for event in &events {
        let state = session.apply(event);
        result.steps.push(SessionStep {
            label: event.label(),
            view: WidgetView {
                kind,
                filter: session.engine().filter().clone(),
                state,
            },
        });
    }

    Ok(result)
}
