//! The set of categories this crate decodes: UAP lookup by (category,
//! edition) and output-record assembly dispatch (spec §4.6 "Two UAP
//! slots carry sentinel meanings", §4.7 "Output record builders").

use crate::context::DecodingContext;
use crate::error::BlockError;
use crate::output::{ItemValue, RecordKind};
use crate::uap::Uap;

use super::{cat010, cat011, cat020, cat021, cat023, cat031, cat034, cat048, cat062, cat247};

/// Look up the active UAP for `category`, given the edition ordinal
/// selected in `ctx.editions` (spec §4.6: registration runs once after
/// edition ordinals are chosen; here the tables are `const` so there is
/// nothing to mutate, just to select between).
pub fn uap_for(category: u8, ctx: &DecodingContext<'_>) -> Result<&'static Uap, BlockError> {
    let edition = ctx.edition_of(category);
    let uap = match category {
        10 => &cat010::UAP,
        11 => &cat011::UAP,
        20 => &cat020::UAP,
        21 => &cat021::UAP,
        23 => match edition {
            0 => &cat023::UAP_ED1,
            _ => &cat023::UAP_ED4,
        },
        31 => &cat031::UAP,
        34 => &cat034::UAP,
        48 => &cat048::UAP,
        62 => match edition {
            0 => &cat062::UAP_TN12,
            _ => &cat062::UAP_TN16,
        },
        247 => &cat247::UAP,
        other => return Err(BlockError::UnknownCategory(other)),
    };
    Ok(uap)
}

/// Fold the generic `(item_name, value)` pairs a record decoded into
/// the category's typed output-record kind (spec §4.7). Categories with
/// no typed builder here still produce a valid [`crate::output::Record`]
/// through [`RecordKind::Generic`].
pub fn build_record_kind(
    category: u8,
    items: &[(&'static str, ItemValue)],
    ctx: &DecodingContext<'_>,
) -> RecordKind {
    match category {
        10 => RecordKind::Mlat020(cat010::assemble_cat010(items)),
        11 => RecordKind::Mlat020(cat011::assemble_cat011(items)),
        20 => RecordKind::Mlat020(cat020::assemble(items)),
        21 => RecordKind::Adsb021(cat021::assemble(items)),
        23 => RecordKind::Station023(cat023::assemble(items, ctx.edition_of(23))),
        31 => RecordKind::Sensor031(cat031::assemble(items)),
        34 => RecordKind::Service034(cat034::assemble(items)),
        48 => RecordKind::Target048(cat048::assemble(items, ctx)),
        62 => RecordKind::Track062(cat062::assemble(items)),
        247 => RecordKind::Version247(cat247::assemble(items)),
        _ => RecordKind::Generic,
    }
}
