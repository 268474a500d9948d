use serde::{Deserialize, Serialize};

use crate::*;

/// Player location at the start of every session.
pub const ORIGIN: Coord2 = (0, 0);

#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum SessionState {
    Active,
    Won,
    Lost,
    OutOfBounds,
    Quit,
}

impl SessionState {
    pub const fn is_active(self) -> bool {
        matches!(self, Self::Active)
    }
}

impl Default for SessionState {
    fn default() -> Self {
        Self::Active
    }
}

/// One line of player input, already interpreted.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum TurnInput {
    Move(Direction),
    Quit,
    Invalid(String),
}

impl TurnInput {
    /// Lower-cases the line; only a lone `w`, `a`, `s`, `d` or `q` is meaningful.
    /// Surrounding whitespace makes the key invalid.
    pub fn parse(line: &str) -> Self {
        let token = line.to_lowercase();
        let mut chars = token.chars();
        match (chars.next(), chars.next()) {
            (Some('q'), None) => Self::Quit,
            (Some(key), None) => match Direction::from_key(key) {
                Some(dir) => Self::Move(dir),
                None => Self::Invalid(token),
            },
            _ => Self::Invalid(token),
        }
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum TurnOutcome {
    /// Unrecognised key, nothing changed.
    Ignored,
    Moved(Coord2),
    Won,
    Lost,
    OutOfBounds,
    Quit,
}

impl TurnOutcome {
    pub const fn ends_session(self) -> bool {
        matches!(self, Self::Won | Self::Lost | Self::OutOfBounds | Self::Quit)
    }

    const fn final_state(self) -> Option<SessionState> {
        match self {
            Self::Ignored | Self::Moved(_) => None,
            Self::Won => Some(SessionState::Won),
            Self::Lost => Some(SessionState::Lost),
            Self::OutOfBounds => Some(SessionState::OutOfBounds),
            Self::Quit => Some(SessionState::Quit),
        }
    }
}

/// A single play-through: owns the field, the player position and the state.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct FieldSession {
    config: FieldConfig,
    field: Field,
    player: Coord2,
    state: SessionState,
}

impl FieldSession {
    /// Puts the player on the origin, then plants the carrot, which wins any
    /// overlap with the player or a hole.
    pub fn new(config: FieldConfig, layout: FieldLayout) -> Result<Self> {
        let FieldLayout { terrain, carrot } = layout;
        if terrain.size() != config.size() {
            return Err(GameError::InvalidFieldShape);
        }

        let mut field = terrain;
        field.set(ORIGIN, Cell::Player)?;
        let replaced = field.set(carrot, Cell::Carrot)?;
        if replaced != Cell::Grass {
            log::debug!("Carrot planted over {replaced:?} at {carrot:?}");
        }

        Ok(Self {
            config,
            field,
            player: ORIGIN,
            state: SessionState::Active,
        })
    }

    /// Generates a fresh layout for `config` and starts a session on it.
    pub fn generate<G: FieldGenerator>(config: FieldConfig, generator: G) -> Result<Self> {
        config.validate()?;
        let layout = generator.generate(&config);
        Self::new(config, layout)
    }

    /// Resumes play on an already populated field, with the player at `player`.
    pub fn from_field(config: FieldConfig, field: Field, player: Coord2) -> Result<Self> {
        if field.size() != config.size() {
            return Err(GameError::InvalidFieldShape);
        }
        let player = field.validate_coords(player)?;

        Ok(Self {
            config,
            field,
            player,
            state: SessionState::Active,
        })
    }

    pub fn field(&self) -> &Field {
        &self.field
    }

    pub fn player(&self) -> Coord2 {
        self.player
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    pub fn render(&self) -> String {
        self.field.render()
    }

    /// Parses and applies one line of player input.
    pub fn play_line(&mut self, line: &str) -> Result<TurnOutcome> {
        log::trace!("Turn input: {line:?}");
        self.play(TurnInput::parse(line))
    }

    pub fn play(&mut self, input: TurnInput) -> Result<TurnOutcome> {
        self.check_active()?;

        let outcome = match &input {
            TurnInput::Quit => TurnOutcome::Quit,
            TurnInput::Invalid(_) => TurnOutcome::Ignored,
            TurnInput::Move(dir) => self.step(*dir),
        };

        if let Some(state) = outcome.final_state() {
            self.state = state;
        }
        log::debug!("Turn {input:?} -> {outcome:?}");
        Ok(outcome)
    }

    fn step(&mut self, dir: Direction) -> TurnOutcome {
        let Some(next) = step_within(self.player, dir, self.field.size()) else {
            return TurnOutcome::OutOfBounds;
        };

        match self.field[next] {
            Cell::Carrot => TurnOutcome::Won,
            Cell::Hole => TurnOutcome::Lost,
            Cell::Grass | Cell::Player => {
                self.field[self.player] = Cell::Grass;
                self.field[next] = Cell::Player;
                self.player = next;
                TurnOutcome::Moved(next)
            }
        }
    }

    fn check_active(&self) -> Result<()> {
        if self.state.is_active() {
            Ok(())
        } else {
            Err(GameError::AlreadyEnded)
        }
    }
}
