use crate::color::Color;
use crate::error::Result;
use crate::geometry;
use crate::picture::{Picture, PixelWrite, Point};
use crate::state::{Action, EditorState};

/// Shapes that are dragged out from a fixed origin
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShapeKind {
    Line,
    Rectangle,
    Circle,
}

impl ShapeKind {
    fn rasterize(self, base: &Picture, origin: Point, pos: Point, color: Color) -> Vec<PixelWrite> {
        match self {
            Self::Line => geometry::line(origin, pos, color),
            Self::Rectangle => geometry::rectangle(origin, pos, color),
            Self::Circle => geometry::circle(base, origin, pos, color),
        }
    }
}

/// Continuation of a pointer gesture between press and release.
///
/// Positions must be fed in the order the pointer produced them: a freehand
/// stroke draws each new segment on top of the previous ones, and later
/// writes win where segments overlap.
#[derive(Debug, Clone)]
pub enum ToolStroke {
    /// Draws a segment from the previous position to each new one, on top of
    /// whatever the editor currently shows and in the current color
    Freehand { last: Point },
    /// Redraws a line, rectangle or circle from `origin` to each new position
    /// onto `base`, the picture as it was when the pointer went down
    Shape {
        kind: ShapeKind,
        origin: Point,
        base: Picture,
        color: Color,
    },
}

impl ToolStroke {
    /// Handle a pointer move to grid cell `pos`
    pub fn on_pointer_move(&mut self, pos: Point, state: &EditorState) -> Result<Action> {
        match self {
            Self::Freehand { last } => {
                let writes = geometry::line(*last, pos, state.color);
                let picture = state.picture.draw(&writes)?;
                *last = pos;
                Ok(Action::picture(picture))
            }
            Self::Shape {
                kind,
                origin,
                base,
                color,
            } => {
                let writes = kind.rasterize(base, *origin, pos, *color);
                Ok(Action::picture(base.draw(&writes)?))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::update_state;
    use crate::tools::ToolType;

    const BG: Color = Color::rgb(0xf0, 0xf0, 0xf0);
    const INK: Color = Color::BLACK;

    fn start(tool: ToolType, pos: Point) -> (EditorState, ToolStroke) {
        let state = EditorState::new(Picture::empty(6, 6, BG).unwrap(), tool, INK);
        let down = tool.on_pointer_down(pos, &state).unwrap();
        let state = update_state(state, down.action);
        (state, down.stroke.unwrap())
    }

    fn ink_count(picture: &Picture) -> usize {
        picture.pixels().iter().filter(|&&c| c == INK).count()
    }

    #[test]
    fn test_freehand_accumulates_segments() {
        let (mut state, mut stroke) = start(ToolType::Draw, Point::new(0, 0));
        for pos in [Point::new(3, 0), Point::new(3, 3)] {
            let action = stroke.on_pointer_move(pos, &state).unwrap();
            state = update_state(state, action);
        }
        // (0,0)..(3,0) then (3,0)..(3,3), sharing the corner
        assert_eq!(ink_count(&state.picture), 7);
        assert_eq!(state.picture.pixel(3, 3).unwrap(), INK);
    }

    #[test]
    fn test_freehand_uses_current_color() {
        let (state, mut stroke) = start(ToolType::Draw, Point::new(0, 0));
        let red = Color::rgb(0xff, 0, 0);
        let state = update_state(state, Action::color(red));
        let action = stroke.on_pointer_move(Point::new(1, 0), &state).unwrap();
        let picture = action.picture.unwrap();
        assert_eq!(picture.pixel(1, 0).unwrap(), red);
    }

    #[test]
    fn test_rectangle_preview_replaces() {
        let (mut state, mut stroke) = start(ToolType::Rectangle, Point::new(1, 1));
        for pos in [Point::new(4, 4), Point::new(2, 2)] {
            let action = stroke.on_pointer_move(pos, &state).unwrap();
            state = update_state(state, action);
        }
        assert_eq!(ink_count(&state.picture), 4);
        assert_eq!(state.picture.pixel(4, 4).unwrap(), BG);
    }

    #[test]
    fn test_line_redraws_from_origin() {
        let (mut state, mut stroke) = start(ToolType::Line, Point::new(0, 0));
        for pos in [Point::new(5, 0), Point::new(0, 5)] {
            let action = stroke.on_pointer_move(pos, &state).unwrap();
            state = update_state(state, action);
        }
        assert_eq!(ink_count(&state.picture), 6);
        assert_eq!(state.picture.pixel(5, 0).unwrap(), BG);
        assert_eq!(state.picture.pixel(0, 5).unwrap(), INK);
    }

    #[test]
    fn test_shape_kind_picks_rasterizer() {
        let base = Picture::empty(6, 6, BG).unwrap();
        let state = EditorState::new(base.clone(), ToolType::Draw, INK);
        let drag = |kind| {
            let mut stroke = ToolStroke::Shape {
                kind,
                origin: Point::new(0, 0),
                base: base.clone(),
                color: INK,
            };
            let action = stroke.on_pointer_move(Point::new(2, 2), &state).unwrap();
            ink_count(&action.picture.unwrap())
        };
        assert_eq!(drag(ShapeKind::Line), 3);
        assert_eq!(drag(ShapeKind::Rectangle), 9);
        assert_eq!(drag(ShapeKind::Circle), 6);
    }

    #[test]
    fn test_circle_press_draws_nothing_then_grows() {
        let (state, mut stroke) = start(ToolType::Circle, Point::new(2, 2));
        assert_eq!(ink_count(&state.picture), 0);
        let action = stroke.on_pointer_move(Point::new(4, 2), &state).unwrap();
        let picture = action.picture.unwrap();
        // radius 2, admitted while distance < 1.5
        assert_eq!(ink_count(&picture), 3);
    }
}
