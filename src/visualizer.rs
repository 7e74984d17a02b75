//! Algorithm visualizer boundary
//!
//! The search visualizers are self-contained: the main menu only constructs
//! one for a given grid density and runs it until it returns. This module
//! defines that contract plus [`GridBoard`], the board the binary launches
//! for every algorithm.

use crate::clock::FrameClock;
use crate::config::DisplayConfig;
use crate::gui::Label;
use crate::input::InputEvent;
use crate::platform::Platform;
use sdl2::keyboard::Keycode;
use sdl2::pixels::Color;
use sdl2::rect::Rect;

/// The search algorithms the main menu can launch
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Algorithm {
    BreadthFirst,
    DepthFirst,
    AStar,
    GreedyBestFirst,
    BidirectionalBfs,
    BidirectionalDfs,
}

impl Algorithm {
    /// All algorithms in main menu order
    pub const ALL: [Algorithm; 6] = [
        Algorithm::BreadthFirst,
        Algorithm::DepthFirst,
        Algorithm::AStar,
        Algorithm::GreedyBestFirst,
        Algorithm::BidirectionalBfs,
        Algorithm::BidirectionalDfs,
    ];

    /// Main menu button caption
    pub fn caption(&self) -> &'static str {
        match self {
            Algorithm::BreadthFirst => "Breadth First Search",
            Algorithm::DepthFirst => "Depth First Search",
            Algorithm::AStar => "A* Search",
            Algorithm::GreedyBestFirst => "Greedy Best First Search",
            Algorithm::BidirectionalBfs => "Bi-directional BFS",
            Algorithm::BidirectionalDfs => "Bi-directional DFS",
        }
    }

    pub fn from_caption(caption: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|a| a.caption() == caption)
    }
}

/// How a visualizer run ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VisualizerExit {
    /// The user went back to the menu
    Finished,
    /// The window was closed
    Quit,
}

/// A running algorithm demonstration
pub trait Visualizer {
    /// Runs frames until the user leaves, sharing the menu's frame clock
    fn run(
        &mut self,
        platform: &mut dyn Platform,
        clock: &mut FrameClock,
    ) -> Result<VisualizerExit, String>;
}

/// Constructs visualizers for the main menu
pub trait VisualizerFactory {
    /// Builds the visualizer for `algorithm` on a grid of `display.columns`
    /// columns
    fn create(&mut self, algorithm: Algorithm, display: DisplayConfig) -> Box<dyn Visualizer>;
}

const BOARD_BACKGROUND: Color = Color::RGB(255, 255, 255);
const BOARD_LINES: Color = Color::RGB(128, 128, 128);
const BOARD_TITLE: Color = Color::RGB(40, 40, 40);

/// An empty square-cell grid sized for the current display
///
/// Shows which algorithm was picked and returns to the menu on escape.
pub struct GridBoard {
    display: DisplayConfig,
    title: Label,
}

impl GridBoard {
    pub fn new(algorithm: Algorithm, display: DisplayConfig) -> Self {
        let title = format!("{}   ESC TO RETURN", algorithm.caption());
        GridBoard {
            display,
            title: Label::new(&title, 20, BOARD_TITLE, (8, 8)),
        }
    }

    /// Edge length of one cell in pixels
    pub fn cell_size(&self) -> u32 {
        (self.display.width / self.display.columns.max(1)).max(1)
    }

    /// Whole rows that fit on screen
    pub fn rows(&self) -> u32 {
        self.display.height / self.cell_size()
    }

    fn render(&self, platform: &mut dyn Platform) -> Result<(), String> {
        platform.clear(BOARD_BACKGROUND)?;

        let cell = self.cell_size();
        let columns = self.display.columns;
        let rows = self.rows();
        let grid_width = columns * cell;
        let grid_height = rows * cell;

        for column in 0..=columns {
            platform.fill_rect(Rect::new((column * cell) as i32, 0, 1, grid_height), BOARD_LINES)?;
        }
        for row in 0..=rows {
            platform.fill_rect(Rect::new(0, (row * cell) as i32, grid_width, 1), BOARD_LINES)?;
        }

        self.title.render(platform)
    }
}

impl Visualizer for GridBoard {
    fn run(
        &mut self,
        platform: &mut dyn Platform,
        clock: &mut FrameClock,
    ) -> Result<VisualizerExit, String> {
        loop {
            for event in platform.poll_events() {
                match event {
                    InputEvent::Quit => return Ok(VisualizerExit::Quit),
                    InputEvent::KeyDown(Keycode::Escape) => return Ok(VisualizerExit::Finished),
                    _ => {}
                }
            }

            self.render(platform)?;
            platform.present();
            clock.tick();
        }
    }
}

/// Builds a [`GridBoard`] for every algorithm
#[derive(Debug, Default)]
pub struct BoardFactory;

impl VisualizerFactory for BoardFactory {
    fn create(&mut self, algorithm: Algorithm, display: DisplayConfig) -> Box<dyn Visualizer> {
        Box::new(GridBoard::new(algorithm, display))
    }
}
