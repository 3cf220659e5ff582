//! Item id translation between the hackmap numbering and the destination one.
//!
//! Hackmap numbers items in three blocks (weapons/armor from 1, misc from
//! 1001, and the rest from 2001). The destination table is zero-based and
//! contiguous:
//!
//! | raw id      | destination        |
//! |-------------|--------------------|
//! | `> 2000`    | `raw - 2001 + 508` |
//! | `1001-2000` | `raw - 1001 + 306` |
//! | `<= 1000`   | `raw - 1`          |

/// Index group text meaning "any value". Never parsed as a number.
pub const UNBOUNDED: &str = "0+";

const BAND3_START: i64 = 2001;
const BAND3_BASE: i64 = 508;
const BAND2_START: i64 = 1001;
const BAND2_BASE: i64 = 306;

/// Remap a raw item id into the destination id space.
pub fn remap_item_id(raw_id: i64) -> i64 {
    if raw_id >= BAND3_START {
        raw_id - BAND3_START + BAND3_BASE
    } else if raw_id >= BAND2_START {
        raw_id - BAND2_START + BAND2_BASE
    } else {
        raw_id - 1
    }
}

/// Convert a one-based index to zero-based. Used for non-item index groups.
pub fn plain_offset(raw_id: i64) -> i64 {
    raw_id - 1
}
