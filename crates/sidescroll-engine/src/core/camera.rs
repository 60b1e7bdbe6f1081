use crate::components::unit::Unit;
use crate::core::scene::Scene;

/// World-scroll controller for a side-scroller.
///
/// The player stays on screen while the world slides underneath: once the
/// player reaches the horizontal screen center, further motion scrolls every
/// scrolling object instead. Near the world's ends the camera stops and the
/// player walks toward the screen edge.
///
/// `origin_x` is how far the screen window has scrolled into the world,
/// always within `[0, world_width - screen_width]`.
#[derive(Debug, Clone, PartialEq)]
pub struct ScrollCamera {
    origin_x: i32,
    world_width: i32,
    screen_width: i32,
}

impl ScrollCamera {
    pub fn new(screen_width: f32, world_width: f32) -> Self {
        Self {
            origin_x: 0,
            world_width: world_width.round() as i32,
            screen_width: screen_width.round() as i32,
        }
    }

    pub fn origin_x(&self) -> i32 {
        self.origin_x
    }

    pub fn world_width(&self) -> i32 {
        self.world_width
    }

    pub fn screen_width(&self) -> i32 {
        self.screen_width
    }

    /// Largest valid origin. Zero when the world is no wider than the screen.
    pub fn max_origin(&self) -> i32 {
        (self.world_width - self.screen_width).max(0)
    }

    /// Screen x at which a unit of `width` is horizontally centered.
    pub fn center_x(&self, width: f32) -> f32 {
        self.screen_width as f32 / 2.0 - width / 2.0
    }

    pub fn to_screen_x(&self, world_x: f32) -> f32 {
        world_x - self.origin_x as f32
    }

    /// Whether the camera is parked against the end of the world that
    /// `displacement` heads toward.
    pub fn at_edge(&self, displacement: i32) -> bool {
        (self.origin_x == 0 && displacement < 0)
            || (self.origin_x == self.max_origin() && displacement > 0)
    }

    /// Move the player by `displacement` pixels, scrolling the world when the
    /// player is centered and the world has room to scroll.
    pub fn scroll_pieces(&mut self, displacement: i32, scene: &mut Scene) {
        let edge = self.at_edge(displacement);
        let Some(player) = scene.player_mut() else {
            return;
        };
        let home = self.center_x(player.width());

        if edge {
            player.pos.x += displacement as f32;
        } else if player.pos.x != home {
            Self::center_player(player, displacement, home);
        } else {
            Self::apply_displacement_to_all_pieces(displacement, scene);
            self.origin_x += displacement;
        }

        self.bound_the_world(scene);
    }

    /// Step the player toward the centre without overshooting it.
    fn center_player(player: &mut Unit, displacement: i32, home: f32) {
        player.pos.x += displacement as f32;
        if (displacement > 0 && player.pos.x > home) || (displacement < 0 && player.pos.x < home) {
            player.pos.x = home;
        }
    }

    /// The world moves opposite to the player's perceived motion.
    fn apply_displacement_to_all_pieces(displacement: i32, scene: &mut Scene) {
        scene.shift_scrolling(-(displacement as f32));
    }

    /// Snap the origin back into range and undo the overshoot on every
    /// scrolling object. Returns the corrective displacement applied.
    pub fn bound_the_world(&mut self, scene: &mut Scene) -> i32 {
        let correction = if self.origin_x < 0 {
            -self.origin_x
        } else if self.origin_x > self.max_origin() {
            self.max_origin() - self.origin_x
        } else {
            return 0;
        };
        // Scrolling `correction` pixels undoes the overshoot.
        Self::apply_displacement_to_all_pieces(correction, scene);
        self.origin_x += correction;
        correction
    }
}
