//! Interactive fiction session management.

use ra_core::{Direction, ItemKind, Room, World};
use rand::SeedableRng;
use rand::rngs::StdRng;
use tracing::debug;

use crate::error::{FictionError, FictionResult};
use crate::narrator::{self, Narration};
use crate::parser::{Command, parse_command};
use crate::player::PlayerState;
use crate::puzzle::{Beam, Ending, draw_beam, targets_obstacle};

/// Prompt shown before an ordinary command.
pub const COMMAND_PROMPT: &str = "> ";

/// Prompt shown while the lens riddle waits for a beam.
pub const BEAM_PROMPT: &str = "> choose beam (red/green/blue): ";

/// An interactive fiction session.
///
/// Owns the world and the player outright; nothing outside the session can
/// change either while it runs.
pub struct FictionSession {
    /// The world being explored.
    world: World,
    /// The player's current state.
    player: PlayerState,
    /// Drives the beam riddle.
    rng: StdRng,
    /// The next line answers the beam riddle instead of being a command.
    awaiting_beam: bool,
    /// Set once the story has been won.
    ending: Option<Ending>,
}

impl FictionSession {
    /// Create a new fiction session at the world's start room.
    ///
    /// The riddle RNG is seeded from the world's seed, so a replayed seed
    /// replays the riddle too.
    pub fn new(world: World) -> FictionResult<Self> {
        world.start_room()?;
        world.goal_room()?;

        let player = PlayerState::new(world.start);
        let rng = StdRng::seed_from_u64(world.seed);

        Ok(Self {
            world,
            player,
            rng,
            awaiting_beam: false,
            ending: None,
        })
    }

    /// Reseed the beam riddle independently of the world.
    pub fn with_puzzle_seed(mut self, seed: u64) -> Self {
        self.rng = StdRng::seed_from_u64(seed);
        self
    }

    /// Get the current world.
    pub fn world(&self) -> &World {
        &self.world
    }

    /// Get the player state.
    pub fn player(&self) -> &PlayerState {
        &self.player
    }

    /// How the story ended, once it has been won.
    pub fn ending(&self) -> Option<Ending> {
        self.ending
    }

    /// Whether the session has finished by any path.
    pub fn is_over(&self) -> bool {
        self.player.game_over
    }

    /// Whether the next line answers the beam riddle.
    pub fn is_awaiting_beam(&self) -> bool {
        self.awaiting_beam
    }

    /// Prompt to show before reading the next line.
    pub fn prompt(&self) -> &'static str {
        if self.awaiting_beam {
            BEAM_PROMPT
        } else {
            COMMAND_PROMPT
        }
    }

    /// Opening narration: greeting plus the start room.
    pub fn welcome(&self) -> FictionResult<Narration> {
        let mut narration = Narration::from(narrator::WELCOME);
        narration.extend(self.do_look(None)?);
        Ok(narration)
    }

    /// Process one line of player input and return the response.
    ///
    /// Runs the win check after every command that succeeds.
    pub fn process(&mut self, input: &str) -> FictionResult<Narration> {
        if self.player.game_over {
            return Err(FictionError::GameOver);
        }

        let mut narration = if self.awaiting_beam {
            self.answer_beam(input)?
        } else {
            self.execute(parse_command(input))?
        };

        if let Some(ending) = self.check_win() {
            narration.extend(ending);
        }
        Ok(narration)
    }

    /// Execute a parsed command.
    pub fn execute(&mut self, command: Command) -> FictionResult<Narration> {
        match command {
            Command::Go { direction } => {
                let direction = direction.ok_or(FictionError::MissingDirection)?;
                self.do_move(&direction)
            }
            Command::Look { target } => self.do_look(target.as_deref()),
            Command::Take { item } => {
                let item = item.ok_or(FictionError::MissingTakeTarget)?;
                self.do_take(&item)
            }
            Command::Use { item, target } => {
                let item = item.ok_or(FictionError::MissingUseTarget)?;
                self.do_use(&item, target.as_deref())
            }
            Command::Inventory => Ok(self.do_inventory()),
            Command::Help => Ok(Narration::from(narrator::HELP)),
            Command::Quit => Ok(self.quit()),
            Command::Empty => Ok(Narration::new()),
            Command::Unknown { input } => Err(FictionError::UnknownCommand(input)),
        }
    }

    /// End the session at the player's request. Skips the win check.
    pub fn quit(&mut self) -> Narration {
        self.player.game_over = true;
        Narration::from(narrator::FAREWELL)
    }

    /// End the session because input ran out or was interrupted.
    pub fn close(&mut self) -> Narration {
        self.player.game_over = true;
        Narration::from(narrator::CLOSING)
    }

    /// Finish the story if the player stands in the open goal room.
    ///
    /// Returns the ending narration the first time only.
    pub fn check_win(&mut self) -> Option<Narration> {
        if self.player.game_over
            || self.player.location != self.world.goal
            || self.world.is_goal_locked()
        {
            return None;
        }

        let ending = Ending::for_flags(self.player.unlocked_goal, self.player.used_lens);
        debug!(?ending, "story ended");
        self.player.game_over = true;
        self.ending = Some(ending);

        let mut narration = Narration::from(ending.text());
        narration.say(narrator::THE_END);
        Some(narration)
    }

    fn current_room(&self) -> FictionResult<&Room> {
        Ok(self.world.room(self.player.location)?)
    }

    fn do_move(&mut self, direction: &str) -> FictionResult<Narration> {
        let destination = Direction::parse(direction)
            .and_then(|dir| self.current_room().ok()?.exit(dir))
            .ok_or(FictionError::NoExit)?;

        if destination == self.world.goal {
            let goal = self.world.goal_room()?;
            if goal.locked {
                let obstacle = goal.lock_name.as_deref().unwrap_or("obstacle");
                return Err(FictionError::Blocked(obstacle.to_string()));
            }
        }

        debug!(from = %self.player.location, to = %destination, "moved");
        self.player.location = destination;
        self.do_look(None)
    }

    fn do_look(&self, target: Option<&str>) -> FictionResult<Narration> {
        let room = self.current_room()?;
        let Some(name) = target else {
            return Ok(narrator::describe_room(room));
        };

        // Room items shadow carried items of the same name.
        let item = room
            .find_item(name)
            .or_else(|| self.player.find_item(name))
            .ok_or(FictionError::NothingSpecial)?;
        Ok(Narration::from(item.description.as_str()))
    }

    fn do_take(&mut self, item_name: &str) -> FictionResult<Narration> {
        let location = self.player.location;
        let room = self.world.room_mut(location)?;

        let item = room.find_item(item_name).ok_or(FictionError::NotHere)?;
        if !item.portable {
            return Err(FictionError::CannotTake);
        }
        let item = room.take_item(item_name).ok_or(FictionError::NotHere)?;

        debug!(item = %item.name, room = %location, "took item");
        let response = format!("Taken: {}.", item.name);
        self.player.add_item(item);
        Ok(Narration::from(response))
    }

    fn do_inventory(&self) -> Narration {
        Narration::from(narrator::describe_inventory(&self.player.item_names()))
    }

    fn do_use(&mut self, item_name: &str, target: Option<&str>) -> FictionResult<Narration> {
        let kind = self
            .player
            .find_item(item_name)
            .map(|item| item.kind)
            .ok_or(FictionError::NotCarried)?;

        match kind {
            ItemKind::PrismLens if targets_obstacle(target) => {
                self.player.used_lens = true;
                let mut narration =
                    Narration::from("You hold the lens to the obstacle. Light fractures into clues.");
                narration.extend(self.attempt_unlock()?);
                Ok(narration)
            }
            ItemKind::CoiledRope => {
                let at_locked_goal =
                    self.player.location == self.world.goal && self.world.is_goal_locked();
                let text = if at_locked_goal {
                    "You try to climb around, but the rope needs an anchor you can't reach."
                } else {
                    "You coil and uncoil the rope. It inspires confidence, if not progress."
                };
                Ok(Narration::from(text))
            }
            ItemKind::RustyKey if targets_obstacle(target) => self.attempt_unlock(),
            _ => Ok(Narration::from("That doesn't seem helpful right now.")),
        }
    }

    /// Work the goal's lock: the key always wins, otherwise a used lens
    /// opens the beam riddle.
    fn attempt_unlock(&mut self) -> FictionResult<Narration> {
        if self.player.has_item(ItemKind::RustyKey) {
            self.open_goal()?;
            debug!(via = "key", "goal unlocked");
            return Ok(Narration::from(
                "You turn the rusty key. The lock protests, then yields.",
            ));
        }

        if self.player.used_lens {
            self.awaiting_beam = true;
            return Ok(Narration::from(
                "Through the prism lens, three beams split across the lock: red, green, blue.",
            ));
        }

        Ok(Narration::from(
            "You need a way to work on the lock. A tool, or a trick of light?",
        ))
    }

    fn answer_beam(&mut self, input: &str) -> FictionResult<Narration> {
        self.awaiting_beam = false;

        let Some(choice) = Beam::parse(input) else {
            return Ok(Narration::from("Indecision refracts into nothing."));
        };

        let correct = draw_beam(&mut self.rng);
        debug!(%choice, %correct, "beam chosen");
        if choice == correct {
            self.open_goal()?;
            debug!(via = "beam", "goal unlocked");
            Ok(Narration::from(format!(
                "The {choice} beam unthreads the seal. It sighs open."
            )))
        } else {
            Ok(Narration::from(
                "The beam fizzles. The seal remains. Perhaps try another approach.",
            ))
        }
    }

    fn open_goal(&mut self) -> FictionResult<()> {
        self.world.unlock_goal()?;
        self.player.unlocked_goal = true;
        Ok(())
    }
}
