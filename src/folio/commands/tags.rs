use crate::commands::helpers::engine_for;
use crate::commands::CmdResult;
use crate::error::Result;
use crate::model::CollectionKind;
use crate::store::ItemSource;

pub fn run<S: ItemSource>(source: &S, kind: CollectionKind) -> Result<CmdResult> {
    let mut result = CmdResult::default();
    let engine = engine_for(source, kind, &mut result);
    let tags = engine.compute_view().available_tags;
    Ok(result.with_tags(tags))
}
