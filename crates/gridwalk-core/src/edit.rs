//! Edit gestures: the explicit context a UI layer owns and threads through
//! pointer presses and drags.
//!
//! A gesture starts with [`Grid::press`], continues with [`Grid::drag`] for
//! every cell the pointer enters, and ends with [`Grid::release`]. Pressing
//! on a marker picks it up and drags move it; pressing anywhere else paints
//! with the selected [`Tool`].

use crate::error::GridError;
use crate::geom::Coord;
use crate::grid::Grid;

/// The instrument applied by a painting gesture.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Tool {
    #[default]
    Wall,
    Weight,
    Clear,
}

/// The gesture in progress.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Drag {
    #[default]
    Idle,
    MovingStart,
    MovingEnd,
    Painting(Tool),
}

/// Interaction state owned by the caller.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EditContext {
    /// Selected instrument for the next painting gesture.
    pub tool: Tool,
    pub drag: Drag,
    /// Set by the host while a search is being played back; every edit is
    /// ignored until it is cleared.
    pub blocked: bool,
}

impl EditContext {
    pub fn new(tool: Tool) -> Self {
        Self {
            tool,
            ..Self::default()
        }
    }
}

impl Grid {
    /// Begin a gesture at `c`. Returns whether the grid changed.
    pub fn press(&mut self, ctx: &mut EditContext, c: Coord) -> Result<bool, GridError> {
        self.check(c)?;
        if ctx.blocked {
            return Ok(false);
        }
        if self.is_start(c) {
            ctx.drag = Drag::MovingStart;
            return Ok(false);
        }
        if self.is_end(c) {
            ctx.drag = Drag::MovingEnd;
            return Ok(false);
        }
        ctx.drag = Drag::Painting(ctx.tool);
        self.paint(ctx.tool, c)
    }

    /// Continue the current gesture onto `c`. Returns whether the grid
    /// changed.
    pub fn drag(&mut self, ctx: &mut EditContext, c: Coord) -> Result<bool, GridError> {
        self.check(c)?;
        if ctx.blocked {
            return Ok(false);
        }
        match ctx.drag {
            Drag::Idle => Ok(false),
            Drag::MovingStart => {
                if self.is_start(c) {
                    return Ok(false);
                }
                self.set_start(c)
            }
            Drag::MovingEnd => {
                if self.is_end(c) {
                    return Ok(false);
                }
                self.set_end(c)
            }
            Drag::Painting(tool) => self.paint(tool, c),
        }
    }

    /// End the current gesture.
    pub fn release(&mut self, ctx: &mut EditContext) {
        ctx.drag = Drag::Idle;
    }

    fn paint(&mut self, tool: Tool, c: Coord) -> Result<bool, GridError> {
        if self.is_start(c) || self.is_end(c) {
            return Ok(false);
        }
        match tool {
            Tool::Wall if self.is_only_wall(c) => Ok(false),
            Tool::Wall => self.set_wall(c),
            Tool::Weight if self.is_only_weight(c) => Ok(false),
            Tool::Weight => self.set_weight(c),
            Tool::Clear => self.clear(c),
        }
    }
}
