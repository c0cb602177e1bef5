//! Application state and the terminal main loop.
//!
//! The loop polls for input until the next fixed tick is due, feeds elapsed
//! time to the frame clock, and steps the active game once per tick.

use crate::core::config::Config;
use crate::core::frame_clock::FrameClock;
use crate::games::menu::process_input as process_menu_input;
use crate::games::{
    bounce, pattern, pong, start_game, swap, ActiveGame, GameKind, GameMenu, MenuAction, Outcome,
};
use crate::input;
use crate::sound::Sound;
use crate::ui;
use crossterm::event::{self, DisableMouseCapture, EnableMouseCapture, Event, KeyEvent, MouseEvent};
use crossterm::terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen};
use crossterm::ExecutableCommand;
use rand::rngs::StdRng;
use rand::SeedableRng;
use ratatui::{backend::Backend, backend::CrosstermBackend, layout::Rect, Terminal};
use std::io;
use std::time::Instant;

/// Terminal size assumed until the first resize event.
const DEFAULT_AREA: Rect = Rect {
    x: 0,
    y: 0,
    width: 80,
    height: 24,
};

pub enum Screen {
    Menu,
    Playing(ActiveGame),
}

pub struct App {
    pub config: Config,
    pub screen: Screen,
    pub menu: GameMenu,
    pub sound: Sound,
    pub clock: FrameClock,
    pub should_quit: bool,
    /// Last known terminal size.
    pub area: Rect,
    rng: StdRng,
}

impl App {
    pub fn new(config: Config, sound: Sound) -> Self {
        Self::with_rng(config, sound, StdRng::from_rng(&mut rand::rng()))
    }

    /// Build with a given random source (seeded in tests).
    pub fn with_rng(config: Config, sound: Sound, rng: StdRng) -> Self {
        Self {
            menu: GameMenu::new(&config),
            clock: FrameClock::new(config.tick_rate_hz),
            config,
            screen: Screen::Menu,
            sound,
            should_quit: false,
            area: DEFAULT_AREA,
            rng,
        }
    }

    pub fn active_game(&self) -> Option<&ActiveGame> {
        match &self.screen {
            Screen::Playing(game) => Some(game),
            Screen::Menu => None,
        }
    }

    /// Start `kind` with the current menu choices.
    pub fn start(&mut self, kind: GameKind) {
        self.menu.select(kind);
        let (world_width, world_height) = ui::bounce_scene::world_size(self.area);
        let options = self
            .menu
            .launch_options(&self.config, world_width, world_height);
        self.screen = Screen::Playing(start_game(kind, &options, &mut self.rng));
        self.clock.reset();
    }

    fn return_to_menu(&mut self) {
        if let Screen::Playing(game) = &self.screen {
            tracing::info!(game = game.kind().slug(), outcome = ?game.outcome(), "left game");
        }
        self.screen = Screen::Menu;
        self.clock.reset();
    }

    pub fn handle_key(&mut self, key: KeyEvent) {
        if !input::is_press(&key) {
            return;
        }
        if input::is_interrupt(&key) {
            self.should_quit = true;
            return;
        }

        let outcome = match self.screen {
            Screen::Menu => {
                match process_menu_input(&mut self.menu, input::map_menu_key(&key)) {
                    MenuAction::Start(kind) => self.start(kind),
                    MenuAction::Quit => self.should_quit = true,
                    MenuAction::None => {}
                }
                return;
            }
            Screen::Playing(ref game) => game.outcome(),
        };

        // Any key dismisses the game over screen
        if matches!(outcome, Some(Outcome::Won | Outcome::Lost)) {
            self.return_to_menu();
            return;
        }

        if let Screen::Playing(game) = &mut self.screen {
            match game {
                ActiveGame::Bounce(g) => bounce::process_input(g, input::map_bounce_key(&key)),
                ActiveGame::Pattern(g) => pattern::process_input(g, input::map_pattern_key(&key)),
                ActiveGame::Swap(g) => {
                    swap::process_input(g, input::map_swap_key(&key), &mut self.rng)
                }
                ActiveGame::Pong(g) => pong::process_input(g, input::map_pong_key(&key)),
            }
        }
        self.after_update();
    }

    pub fn handle_mouse(&mut self, mouse: MouseEvent) {
        let Screen::Playing(game) = &mut self.screen else {
            return;
        };
        if game.outcome().is_some() {
            return;
        }
        let Some(cell) = input::clicked_cell(game, &mouse, self.area) else {
            return;
        };

        match game {
            ActiveGame::Pattern(g) => pattern::process_input(g, pattern::PatternInput::Click(cell)),
            ActiveGame::Swap(g) => {
                swap::process_input(g, swap::SwapInput::Click(cell), &mut self.rng)
            }
            ActiveGame::Bounce(_) | ActiveGame::Pong(_) => {}
        }
        self.after_update();
    }

    pub fn handle_resize(&mut self, width: u16, height: u16) {
        self.area = Rect::new(0, 0, width, height);
        if let Screen::Playing(game) = &mut self.screen {
            let (world_width, world_height) = ui::bounce_scene::world_size(self.area);
            game.resize(world_width, world_height);
        }
    }

    /// Feed `dt_ms` of wall time and run the ticks it covers.
    pub fn advance(&mut self, dt_ms: u64) -> u32 {
        let ticks = self.clock.advance(dt_ms);
        if let Screen::Playing(game) = &mut self.screen {
            for _ in 0..ticks {
                if game.outcome().is_some() {
                    break;
                }
                game.step(&mut self.rng);
            }
        }
        if ticks > 0 {
            self.after_update();
        }
        ticks
    }

    /// Play queued events and leave the game if the player quit.
    fn after_update(&mut self) {
        let Screen::Playing(game) = &mut self.screen else {
            return;
        };
        for event in game.take_events() {
            tracing::trace!(?event, "game event");
            self.sound.play(event);
        }
        if game.outcome() == Some(Outcome::Quit) {
            self.return_to_menu();
        }
    }
}

/// Run the arcade in the terminal until the player quits.
pub fn run(config: Config, initial_game: Option<GameKind>) -> io::Result<()> {
    let sound = Sound::load(config.sound);
    tracing::info!(
        tick_rate_hz = config.tick_rate_hz,
        sound = sound.output_name(),
        mouse = config.mouse,
        "arcade starting"
    );
    let mut app = App::new(config, sound);

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    if let Err(e) = setup_screen(&mut stdout, app.config.mouse) {
        let _ = disable_raw_mode();
        return Err(e);
    }
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = run_loop(&mut terminal, &mut app, initial_game);

    // Restore the terminal even when the loop failed
    let restored = restore_terminal(&mut terminal, app.config.mouse);
    if let Err(e) = &result {
        tracing::error!(error = %e, "main loop failed");
    }
    result.and(restored)
}

fn setup_screen(stdout: &mut io::Stdout, mouse: bool) -> io::Result<()> {
    stdout.execute(EnterAlternateScreen)?;
    if mouse {
        stdout.execute(EnableMouseCapture)?;
    }
    Ok(())
}

fn restore_terminal(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    mouse: bool,
) -> io::Result<()> {
    disable_raw_mode()?;
    if mouse {
        terminal.backend_mut().execute(DisableMouseCapture)?;
    }
    terminal.backend_mut().execute(LeaveAlternateScreen)?;
    terminal.show_cursor()
}

fn run_loop<B: Backend>(
    terminal: &mut Terminal<B>,
    app: &mut App,
    initial_game: Option<GameKind>,
) -> io::Result<()> {
    let size = terminal.size()?;
    app.handle_resize(size.width, size.height);
    if let Some(kind) = initial_game {
        app.start(kind);
    }

    let mut last_frame = Instant::now();
    while !app.should_quit {
        terminal.draw(|frame| ui::draw(frame, app))?;

        if event::poll(app.clock.time_until_next_tick())? {
            match event::read()? {
                Event::Key(key) => app.handle_key(key),
                Event::Mouse(mouse) => app.handle_mouse(mouse),
                Event::Resize(width, height) => app.handle_resize(width, height),
                _ => {}
            }
        }

        let now = Instant::now();
        app.advance(now.duration_since(last_frame).as_millis() as u64);
        last_frame = now;
    }

    Ok(())
}
