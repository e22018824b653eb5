//! Game flow: started flag, reset requests and the developer UI toggle.

/// Requests the manager hands to the host after a frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameCommand {
    /// Reload the scene with this build index, resetting all scene state.
    ReloadScene(usize),
}

/// Developer UI root. Only visibility is tracked; drawing is the host's job.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DevUi {
    pub visible: bool,
}

#[derive(Debug, Default)]
pub struct GameManager {
    started: bool,
    active_scene: usize,
    dev_ui: DevUi,
    commands: Vec<GameCommand>,
}

impl GameManager {
    pub fn new(active_scene: usize, dev_ui: DevUi) -> Self {
        Self {
            started: false,
            active_scene,
            dev_ui,
            commands: Vec::new(),
        }
    }

    /// Whether `start_game` has been called. Survives scene reloads.
    pub fn is_started(&self) -> bool {
        self.started
    }

    pub fn active_scene(&self) -> usize {
        self.active_scene
    }

    pub fn dev_ui(&self) -> DevUi {
        self.dev_ui
    }

    /// Prepares the freshly loaded scene.
    pub fn setup_game(&mut self) {
        log::info!(
            "setting up scene {} (started: {})",
            self.active_scene,
            self.started
        );
    }

    pub fn start_game(&mut self) {
        self.started = true;
        self.reset_game();
    }

    /// Requests a reload of the active scene.
    pub fn reset_game(&mut self) {
        log::info!("reloading scene {}", self.active_scene);
        self.commands.push(GameCommand::ReloadScene(self.active_scene));
    }

    pub fn toggle_dev_ui(&mut self) {
        self.dev_ui.visible = !self.dev_ui.visible;
        log::debug!("dev ui visible: {}", self.dev_ui.visible);
    }

    /// Takes the queued commands, oldest first.
    pub fn drain_commands(&mut self) -> Vec<GameCommand> {
        std::mem::take(&mut self.commands)
    }
}
