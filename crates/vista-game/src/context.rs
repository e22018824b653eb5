//! Per-frame game driver.
//!
//! `GameContext` is built once at startup and owns every game component; the
//! host calls [`GameContext::frame`] once per rendered frame and applies the
//! returned camera fit and drained commands.

use vista_engine::camera::{CameraRig, CameraRigConfig, FitOutput};
use vista_engine::coords::{ScreenSize, Vec2, Vec3};
use vista_engine::input::{ActionPhase, InputFrame, InputState, Key};
use vista_engine::time::{FixedStep, FrameTime};

use crate::manager::{DevUi, GameCommand, GameManager};
use crate::player::Player;
use crate::settings::GameSettings;

/// Key that shows or hides the developer UI.
pub const TOGGLE_DEV_UI_KEY: Key = Key::F1;

#[derive(Debug)]
pub struct GameContext {
    pub settings: GameSettings,
    pub manager: GameManager,
    pub camera: CameraRig,
    pub player: Player,
    fixed: FixedStep,
}

impl GameContext {
    pub fn new(settings: GameSettings) -> Self {
        let camera = CameraRig::new(CameraRigConfig {
            target_resolution: settings.target_resolution.into(),
            zoom_speed: settings.zoom_speed,
            follow: settings.follow_player,
            position: Vec3::new(0.0, settings.camera_height, 0.0),
        });
        let player = Player::new(Vec3::zero(), settings.player_speed);
        let mut manager = GameManager::new(0, DevUi { visible: settings.dev_ui_visible });
        manager.setup_game();

        Self {
            settings,
            manager,
            camera,
            player,
            fixed: FixedStep::default(),
        }
    }

    /// Runs one frame. Returns the camera fit when it changed this frame.
    pub fn frame(
        &mut self,
        screen: ScreenSize,
        input: &InputState,
        input_frame: &InputFrame,
        time: FrameTime,
    ) -> Option<FitOutput> {
        self.dispatch_input(input, input_frame);

        for _ in 0..self.fixed.advance(time.dt) {
            self.player.fixed_update(self.fixed.step());
        }

        let raw_zoom = self.player.take_zoom();
        let zoom = self.player.smooth_zoom(raw_zoom, &self.settings);
        if zoom != 0.0 {
            self.camera.zoom_view(zoom);
        }

        let fitted = self.camera.update(screen, Some(self.player.position));

        if input.pointer_pos.is_some() && self.settings.picks_ground_plane() {
            // Pointer positions are top-left origin; the viewport is bottom-left.
            let look = self.player.look_input();
            if let Some(ground) = self
                .camera
                .screen_to_ground(screen, Vec2::new(look.x, screen.height - look.y))
            {
                self.player.rotate_player(ground);
            }
        }

        fitted
    }

    /// Commands queued by the manager since the last call.
    pub fn drain_commands(&mut self) -> Vec<GameCommand> {
        self.manager.drain_commands()
    }

    fn dispatch_input(&mut self, input: &InputState, input_frame: &InputFrame) {
        let x = input.axis(Key::A, Key::D) + input.axis(Key::ArrowLeft, Key::ArrowRight);
        let y = input.axis(Key::S, Key::W) + input.axis(Key::ArrowDown, Key::ArrowUp);
        self.player.on_move(Vec2::new(x.clamp(-1.0, 1.0), y.clamp(-1.0, 1.0)));

        if let Some(p) = input.pointer_pos {
            self.player.on_look(p);
        }

        if input_frame.wheel.y != 0.0 {
            self.player.on_zoom(input_frame.wheel.y, ActionPhase::Started);
        }

        if input_frame.key_pressed(TOGGLE_DEV_UI_KEY) {
            self.manager.toggle_dev_ui();
        }
    }
}

impl Default for GameContext {
    fn default() -> Self {
        Self::new(GameSettings::default())
    }
}
