mod board_screen;

pub use board_screen::BoardScreen;
