/// Longest player name kept after trimming; longer names are cut.
pub const MAX_NAME_LENGTH: usize = 32;

/// Width of the dashes on either side of a turn banner.
pub const TURN_BANNER_WIDTH: usize = 16;
