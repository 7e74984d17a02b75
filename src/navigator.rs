//! Modal screen stack
//!
//! A single loop drives every screen. Only the top of the stack is live: it
//! receives input and is rendered, while the screens below it are suspended
//! exactly where they were. Spawning pushes, stopping pops.
//!
//! A resolution change pushes a fresh main menu on top of the settings
//! screen. The main menu that opened the settings screen stays below both
//! and only resumes once everything above it has been popped, which in
//! practice never happens because leaving a main menu ends the application.

use crate::clock::FrameClock;
use crate::gui::{ControlMenu, MainMenu, Screen, ScreenRequest, SettingsMenu, Transition};
use crate::input::InputEvent;
use crate::logging;
use crate::platform::Platform;
use crate::visualizer::{VisualizerExit, VisualizerFactory};

/// Why the navigation loop ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Exit {
    /// The window was closed or the main menu was escaped
    Quit,
    /// The last screen was popped
    StackEmpty,
}

pub struct Navigator<F: VisualizerFactory> {
    stack: Vec<Box<dyn Screen>>,
    clock: FrameClock,
    visualizers: F,
}

impl<F: VisualizerFactory> Navigator<F> {
    pub fn new(root: Box<dyn Screen>, clock: FrameClock, visualizers: F) -> Self {
        Navigator {
            stack: vec![root],
            clock,
            visualizers,
        }
    }

    /// Number of screens on the stack
    #[cfg(test)]
    pub fn depth(&self) -> usize {
        self.stack.len()
    }

    /// The live screen
    pub fn top(&self) -> Option<&dyn Screen> {
        self.stack.last().map(|screen| screen.as_ref())
    }

    #[cfg(test)]
    pub fn visualizers(&self) -> &F {
        &self.visualizers
    }

    /// Runs frames until the application quits or the stack empties
    pub fn run(&mut self, platform: &mut dyn Platform) -> Result<Exit, String> {
        loop {
            match self.stack.last() {
                None => return Ok(Exit::StackEmpty),
                Some(top) if !top.is_running() => {
                    logging::info(&format!("Leaving {}", top.name()));
                    self.stack.pop();
                    continue;
                }
                Some(_) => {}
            }

            if let Some(exit) = self.frame(platform)? {
                return Ok(exit);
            }
        }
    }

    /// One iteration of the live screen's frame loop
    fn frame(&mut self, platform: &mut dyn Platform) -> Result<Option<Exit>, String> {
        if let Some(top) = self.stack.last_mut() {
            top.menu_mut().begin_frame();
        }

        for event in platform.poll_events() {
            if event == InputEvent::Quit {
                logging::info("Window closed");
                return Ok(Some(Exit::Quit));
            }

            let pointer = platform.pointer();
            let Some(top) = self.stack.last_mut() else {
                break;
            };
            // A stopped screen ignores the rest of its frame's input
            if !top.is_running() {
                continue;
            }

            match top.react(&event, pointer) {
                Transition::None => {}
                Transition::Stop => top.menu_mut().stop(),
                Transition::Quit => {
                    logging::info(&format!("Quit from {}", top.name()));
                    return Ok(Some(Exit::Quit));
                }
                Transition::Spawn(request) => {
                    if let Some(exit) = self.spawn(request, platform)? {
                        return Ok(Some(exit));
                    }
                }
            }
        }

        if let Some(top) = self.stack.last() {
            let pointer = platform.pointer();
            top.menu().render(platform, pointer)?;
        }
        platform.present();
        self.clock.tick();

        Ok(None)
    }

    /// Opens `request` on top of the live screen
    ///
    /// Visualizers run to completion before this returns; screens are pushed
    /// and take over from the next event on.
    fn spawn(
        &mut self,
        request: ScreenRequest,
        platform: &mut dyn Platform,
    ) -> Result<Option<Exit>, String> {
        let Some(display) = self.top().map(|screen| screen.display()) else {
            return Ok(None);
        };

        let screen: Box<dyn Screen> = match request {
            ScreenRequest::Controls => Box::new(ControlMenu::new(display)),
            ScreenRequest::Settings => Box::new(SettingsMenu::new(display)),
            ScreenRequest::MainMenu(next) => {
                platform.set_display_mode(next.width, next.height)?;
                logging::info(&format!(
                    "Display set to {}x{} ({} columns)",
                    next.width, next.height, next.columns
                ));
                Box::new(MainMenu::new(next))
            }
            ScreenRequest::Visualizer(algorithm) => {
                logging::info(&format!(
                    "Launching {} on {} columns",
                    algorithm.caption(),
                    display.columns
                ));
                let mut visualizer = self.visualizers.create(algorithm, display);
                let exit = visualizer.run(platform, &mut self.clock)?;
                logging::info(&format!("{} returned", algorithm.caption()));

                return Ok(match exit {
                    VisualizerExit::Finished => None,
                    VisualizerExit::Quit => Some(Exit::Quit),
                });
            }
        };

        logging::info(&format!("Opening {}", screen.name()));
        self.stack.push(screen);
        Ok(None)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{DisplayConfig, Resolution};
    use crate::gui::main_menu::{CONTROLS, SETTINGS};
    use crate::platform::scripted::ScriptedPlatform;
    use crate::platform::Point;
    use crate::visualizer::{Algorithm, Visualizer};
    use sdl2::keyboard::Keycode;
    use sdl2::mouse::MouseButton;
    use std::cell::Cell;
    use std::rc::Rc;

    /// Visualizer that returns immediately and counts its runs
    struct CountingVisualizer {
        runs: Rc<Cell<usize>>,
        exit: VisualizerExit,
    }

    impl Visualizer for CountingVisualizer {
        fn run(
            &mut self,
            _platform: &mut dyn Platform,
            _clock: &mut FrameClock,
        ) -> Result<VisualizerExit, String> {
            self.runs.set(self.runs.get() + 1);
            Ok(self.exit)
        }
    }

    struct RecordingFactory {
        created: Vec<(Algorithm, DisplayConfig)>,
        runs: Rc<Cell<usize>>,
        exit: VisualizerExit,
    }

    impl RecordingFactory {
        fn new(exit: VisualizerExit) -> Self {
            RecordingFactory {
                created: Vec::new(),
                runs: Rc::new(Cell::new(0)),
                exit,
            }
        }
    }

    impl VisualizerFactory for RecordingFactory {
        fn create(&mut self, algorithm: Algorithm, display: DisplayConfig) -> Box<dyn Visualizer> {
            self.created.push((algorithm, display));
            Box::new(CountingVisualizer {
                runs: self.runs.clone(),
                exit: self.exit,
            })
        }
    }

    fn navigator(root: Box<dyn Screen>) -> Navigator<RecordingFactory> {
        Navigator::new(root, FrameClock::new(0), RecordingFactory::new(VisualizerExit::Finished))
    }

    fn main_menu_navigator() -> Navigator<RecordingFactory> {
        navigator(Box::new(MainMenu::new(Resolution::Hd.display())))
    }

    /// Left click on the top-left pixel of the button captioned `caption`
    fn click(screen: &dyn Screen, caption: &str) -> InputEvent {
        let rect = screen
            .menu()
            .buttons()
            .iter()
            .find(|b| b.caption() == Some(caption))
            .expect("button exists")
            .rect();
        let (x, y): Point = (rect.x(), rect.y());
        InputEvent::MouseDown {
            button: MouseButton::Left,
            x,
            y,
        }
    }

    fn escape() -> InputEvent {
        InputEvent::KeyDown(Keycode::Escape)
    }

    #[test]
    fn test_escape_on_main_menu_quits() {
        let mut nav = main_menu_navigator();
        let mut platform = ScriptedPlatform::new();
        platform.push_batch(vec![escape()]);

        assert_eq!(nav.run(&mut platform), Ok(Exit::Quit));
        assert_eq!(platform.polls, 1);
        assert_eq!(platform.presents, 0);
        assert_eq!(nav.depth(), 1);
    }

    #[test]
    fn test_window_close_quits() {
        let mut nav = main_menu_navigator();
        let mut platform = ScriptedPlatform::new();
        platform.push_batch(vec![InputEvent::MouseMove { x: 5, y: 5 }]);
        platform.push_batch(vec![InputEvent::Quit, escape()]);

        assert_eq!(nav.run(&mut platform), Ok(Exit::Quit));
        assert_eq!(platform.presents, 1);
    }

    #[test]
    fn test_controls_escape_returns_to_main_menu() {
        let mut nav = main_menu_navigator();
        let main = MainMenu::new(Resolution::Hd.display());
        let mut platform = ScriptedPlatform::new();
        platform.push_batch(vec![click(&main, CONTROLS)]);
        platform.push_batch(vec![escape()]);
        platform.push_batch(vec![]);

        // Script end closes the window
        assert_eq!(nav.run(&mut platform), Ok(Exit::Quit));

        // Frame 1: controls pushed and drawn
        assert!(platform.presented_text[0].iter().any(|t| t.starts_with("Esc -")));
        // Frame 2: escape handled, controls stopped but finishes its frame
        assert!(platform.presented_text[1].iter().any(|t| t.starts_with("Esc -")));
        // Frame 3: main menu is live again
        assert!(platform.presented_text[2].iter().any(|t| t == "Path Finding Visualizer"));
        assert_eq!(nav.depth(), 1);
        assert_eq!(nav.top().map(|s| s.name()), Some("main menu"));
    }

    #[test]
    fn test_stopped_screen_leaves_within_one_iteration() {
        let mut nav = navigator(Box::new(ControlMenu::new(Resolution::Hd.display())));
        let mut platform = ScriptedPlatform::new();
        platform.push_batch(vec![escape()]);

        assert_eq!(nav.run(&mut platform), Ok(Exit::StackEmpty));
        assert_eq!(platform.polls, 1);
        assert_eq!(nav.depth(), 0);
    }

    #[test]
    fn test_settings_escape_returns_to_main_menu() {
        let mut nav = main_menu_navigator();
        let main = MainMenu::new(Resolution::Hd.display());
        let mut platform = ScriptedPlatform::new();
        platform.push_batch(vec![click(&main, SETTINGS)]);
        platform.push_batch(vec![escape()]);
        platform.push_batch(vec![]);

        assert_eq!(nav.run(&mut platform), Ok(Exit::Quit));
        assert!(platform.presented_text[0].iter().any(|t| t == "Resolution:"));
        assert_eq!(nav.depth(), 1);
        assert!(platform.display_modes.is_empty());
    }

    #[test]
    fn test_algorithm_dispatch() {
        let mut nav = main_menu_navigator();
        let main = MainMenu::new(Resolution::Hd.display());
        let mut platform = ScriptedPlatform::new();
        platform.push_batch(vec![click(&main, "A* Search")]);

        assert_eq!(nav.run(&mut platform), Ok(Exit::Quit));

        let factory = nav.visualizers();
        assert_eq!(factory.created.len(), 1);
        assert_eq!(factory.created[0].0, Algorithm::AStar);
        assert_eq!(factory.created[0].1.columns, 80);
        assert_eq!(factory.runs.get(), 1);
        // The main menu resumed and drew its frame
        assert_eq!(nav.depth(), 1);
        assert_eq!(platform.presents, 1);
    }

    #[test]
    fn test_visualizer_quit_ends_application() {
        let mut nav = Navigator::new(
            Box::new(MainMenu::new(Resolution::Hd.display())) as Box<dyn Screen>,
            FrameClock::new(0),
            RecordingFactory::new(VisualizerExit::Quit),
        );
        let main = MainMenu::new(Resolution::Hd.display());
        let mut platform = ScriptedPlatform::new();
        platform.push_batch(vec![click(&main, "Bi-directional DFS"), escape()]);
        platform.push_batch(vec![]);

        assert_eq!(nav.run(&mut platform), Ok(Exit::Quit));
        assert_eq!(platform.polls, 1);
        assert_eq!(nav.visualizers().runs.get(), 1);
    }

    #[test]
    fn test_resolution_change_pushes_new_main_menu() {
        let mut nav = main_menu_navigator();
        let main = MainMenu::new(Resolution::Hd.display());
        let settings = SettingsMenu::new(Resolution::Hd.display());
        let bigger = MainMenu::new(Resolution::Medium.display());

        let mut platform = ScriptedPlatform::new();
        platform.push_batch(vec![click(&main, SETTINGS)]);
        platform.push_batch(vec![click(&settings, "1400x840")]);
        platform.push_batch(vec![click(&bigger, "Breadth First Search")]);
        platform.push_batch(vec![escape()]);

        assert_eq!(nav.run(&mut platform), Ok(Exit::Quit));

        assert_eq!(platform.display_modes, vec![(1400, 840)]);
        // First main menu, settings, new main menu
        assert_eq!(nav.depth(), 3);
        assert_eq!(nav.top().map(|s| s.display().columns), Some(100));

        let factory = nav.visualizers();
        assert_eq!(factory.created, vec![(Algorithm::BreadthFirst, Resolution::Medium.display())]);
    }

    #[test]
    fn test_unrecognized_events_are_no_ops() {
        let mut nav = main_menu_navigator();
        let mut platform = ScriptedPlatform::new();
        platform.push_batch(vec![
            InputEvent::MouseMove { x: 60, y: 40 },
            InputEvent::KeyDown(Keycode::Space),
            InputEvent::MouseDown {
                button: MouseButton::Middle,
                x: 60,
                y: 40,
            },
        ]);

        assert_eq!(nav.run(&mut platform), Ok(Exit::Quit));
        assert_eq!(nav.depth(), 1);
        assert_eq!(platform.presents, 1);
        assert!(nav.visualizers().created.is_empty());
    }
}
