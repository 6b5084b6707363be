use std::io::{Write, stdout};
use std::time::Instant;

use crossterm::{
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEvent, KeyEventKind,
        KeyModifiers, MouseEvent, MouseEventKind,
    },
    execute,
};
use linebox_config::Config;
use linebox_core::Renderer;
use linebox_render::Scene;
use ratatui::{DefaultTerminal, Frame};
use tracing::{debug, info};

mod logging;

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;
    if let Some(path) = logging::init()? {
        info!(path = %path.display(), "logging initialised");
    }

    let config = Config::load()?;
    let app = App::new(&config)?;

    let terminal = ratatui::init();
    let result = with_mouse_capture(&mut stdout(), || app.run(terminal));
    ratatui::restore();
    result
}

/// Run `body` with mouse capture enabled on `out`.
///
/// Capture is disabled again whether or not `body` fails; the first error
/// wins. If capture cannot be enabled `body` does not run.
fn with_mouse_capture<W: Write>(
    out: &mut W,
    body: impl FnOnce() -> color_eyre::Result<()>,
) -> color_eyre::Result<()> {
    execute!(out, EnableMouseCapture)?;
    let result = body();
    let disabled = execute!(out, DisableMouseCapture);
    result?;
    disabled?;
    Ok(())
}

/// The main application which holds the state and logic of the application.
#[derive(Debug)]
pub struct App {
    /// Is the application running?
    running: bool,
    /// Animation state of the node chain.
    renderer: Renderer,
    /// Colors and cell metrics for drawing.
    scene: Scene,
}

impl App {
    /// Construct a new instance of [`App`] from the loaded configuration.
    pub fn new(config: &Config) -> color_eyre::Result<Self> {
        let scene = Scene::new(
            &config.palette_rgb()?,
            config.background_rgb()?,
            config.cell_aspect,
        );
        Ok(Self {
            running: false,
            renderer: Renderer::new(config.settings()),
            scene,
        })
    }

    /// Run the application's main loop.
    pub fn run(mut self, mut terminal: DefaultTerminal) -> color_eyre::Result<()> {
        info!(nodes = self.renderer.chain().len(), "starting animation loop");
        self.running = true;
        while self.running {
            terminal.draw(|frame| self.render(frame))?;
            self.handle_crossterm_events()?;
            self.renderer.tick(Instant::now());
        }
        Ok(())
    }

    /// Renders the user interface.
    fn render(&self, frame: &mut Frame) {
        self.scene.render(frame, frame.area(), &self.renderer);
    }

    /// Reads the crossterm events and updates the state of [`App`].
    /// Blocks at most until the next animation tick is due.
    fn handle_crossterm_events(&mut self) -> color_eyre::Result<()> {
        let timeout = self.renderer.poll_timeout(Instant::now());
        if event::poll(timeout)? {
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => self.on_key_event(key),
                Event::Mouse(mouse) => self.on_mouse_event(mouse),
                // Next loop iteration redraws at the new size
                Event::Resize(width, height) => debug!(width, height, "terminal resized"),
                _ => {}
            }
        }
        Ok(())
    }

    /// Handles the key events and updates the state of [`App`].
    fn on_key_event(&mut self, key: KeyEvent) {
        match (key.modifiers, key.code) {
            (_, KeyCode::Esc | KeyCode::Char('q'))
            | (KeyModifiers::CONTROL, KeyCode::Char('c') | KeyCode::Char('C')) => self.quit(),
            (_, KeyCode::Char(' ') | KeyCode::Enter) => self.tap(),
            _ => {}
        }
    }

    /// Any mouse button press advances the animation.
    fn on_mouse_event(&mut self, mouse: MouseEvent) {
        if let MouseEventKind::Down(_) = mouse.kind {
            self.tap();
        }
    }

    /// Start the next step unless one is already running.
    fn tap(&mut self) {
        if !self.renderer.handle_tap(Instant::now()) {
            debug!("tap ignored, animation in progress");
        }
    }

    /// Set running to false to quit the application.
    fn quit(&mut self) {
        self.running = false;
    }
}

#[cfg(test)]
mod tests {
    use std::io;

    use color_eyre::eyre::eyre;
    use crossterm::event::MouseButton;

    use super::*;

    /// Writer that rejects every write.
    struct BrokenPipe;

    impl Write for BrokenPipe {
        fn write(&mut self, _: &[u8]) -> io::Result<usize> {
            Err(io::Error::from(io::ErrorKind::BrokenPipe))
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn test_mouse_capture_failure_skips_body() {
        let mut ran = false;
        let result = with_mouse_capture(&mut BrokenPipe, || {
            ran = true;
            Ok(())
        });
        assert!(result.is_err());
        assert!(!ran);
    }

    #[test]
    fn test_mouse_capture_disabled_after_body_error() {
        let mut out = Vec::new();
        let result = with_mouse_capture(&mut out, || Err(eyre!("draw failed")));
        assert_eq!(result.unwrap_err().to_string(), "draw failed");

        let written = String::from_utf8_lossy(&out);
        assert!(written.contains("\x1b[?1000h"));
        assert!(written.contains("\x1b[?1000l"));
    }

    fn app() -> App {
        App::new(&Config::default()).unwrap()
    }

    fn key(code: KeyCode, modifiers: KeyModifiers) -> KeyEvent {
        KeyEvent::new(code, modifiers)
    }

    #[test]
    fn test_quit_keys() {
        for event in [
            key(KeyCode::Char('q'), KeyModifiers::NONE),
            key(KeyCode::Esc, KeyModifiers::NONE),
            key(KeyCode::Char('c'), KeyModifiers::CONTROL),
        ] {
            let mut app = app();
            app.running = true;
            app.on_key_event(event);
            assert!(!app.running);
        }
    }

    #[test]
    fn test_space_starts_animation() {
        let mut app = app();
        app.on_key_event(key(KeyCode::Char(' '), KeyModifiers::NONE));
        assert!(app.renderer.is_animating());
    }

    #[test]
    fn test_mouse_press_starts_animation() {
        let mut app = app();
        app.on_mouse_event(MouseEvent {
            kind: MouseEventKind::Moved,
            column: 3,
            row: 4,
            modifiers: KeyModifiers::NONE,
        });
        assert!(!app.renderer.is_animating());

        app.on_mouse_event(MouseEvent {
            kind: MouseEventKind::Down(MouseButton::Left),
            column: 3,
            row: 4,
            modifiers: KeyModifiers::NONE,
        });
        assert!(app.renderer.is_animating());
    }
}
