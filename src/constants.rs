// Board layout (a 864x640 window of 32px cells under a 64px status bar)
pub const BOARD_WIDTH: usize = 27;
pub const BOARD_HEIGHT: usize = 18;
pub const DEFAULT_MINE_COUNT: usize = 100;

// Frame loop
pub const FPS: u64 = 30;
pub const FRAME_INTERVAL_MS: u64 = 1000 / FPS;

// Explosion sequencing, in frames
pub const EXPLOSION_STAGGER_FRAMES: u64 = 3;
pub const EXPLOSION_FRAMES_PER_STAGE: u64 = 3;
pub const EXPLOSION_STAGES: u64 = 10;

// Terminal geometry
pub const CELL_COLS: u16 = 2;
pub const CELL_ROWS: u16 = 1;
pub const STATUS_BAR_ROWS: u16 = 2;

// Logging
pub const LOG_FILE_NAME: &str = "minesweeper.log";
