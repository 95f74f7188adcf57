//! Scrollable list of buttons with focus highlighting
//!
//! A list owns its items and rewrites their position and palette on
//! every draw; only the per-item dirty flags decide whether pixels
//! actually change. Selection moves either with wrap-around stepping
//! (`to_next_item`/`to_prev_item`, full repaint) or with clamped
//! scrolling (`scroll_up`/`scroll_down`, repaint only when the selection
//! moved).

use alloc::vec::Vec;

use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::Rectangle;

use crate::components::button::{Align, Button};
use crate::surface::DrawSurface;
use crate::touch::TouchSource;

pub struct List {
    items: Vec<Button>,
    origin: Point,
    item_width: u32,
    item_height: u32,

    fg: Rgb565,
    bg: Rgb565,
    focus_fg: Rgb565,
    focus_bg: Rgb565,

    current_item: usize,
    prev_item: Option<usize>,
    /// Window-local row of the focused item.
    current_visible_item: usize,
    /// Size of the visible window. Assigned from the item count at bind
    /// time, which is normally zero; callers size the window explicitly
    /// with [`set_visible_count`](Self::set_visible_count) after
    /// populating the list.
    visible_count: usize,
    scroll_position: usize,
    visible: bool,
}

impl List {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        x: i32,
        y: i32,
        item_width: u32,
        item_height: u32,
        fg: Rgb565,
        bg: Rgb565,
        focus_fg: Rgb565,
        focus_bg: Rgb565,
    ) -> Self {
        let mut list = Self {
            items: Vec::new(),
            origin: Point::zero(),
            item_width: 0,
            item_height: 0,
            fg,
            bg,
            focus_fg,
            focus_bg,
            current_item: 0,
            prev_item: None,
            current_visible_item: 0,
            visible_count: 0,
            scroll_position: 0,
            visible: true,
        };
        list.bind(x, y, item_width, item_height, fg, bg, focus_fg, focus_bg);
        list
    }

    /// (Re)initializes geometry and palettes. The visible window size is
    /// taken from the items present right now.
    #[allow(clippy::too_many_arguments)]
    pub fn bind(
        &mut self,
        x: i32,
        y: i32,
        item_width: u32,
        item_height: u32,
        fg: Rgb565,
        bg: Rgb565,
        focus_fg: Rgb565,
        focus_bg: Rgb565,
    ) {
        self.origin = Point::new(x, y);
        self.item_width = item_width;
        self.item_height = item_height;
        self.fg = fg;
        self.bg = bg;
        self.focus_fg = focus_fg;
        self.focus_bg = focus_bg;
        self.visible_count = self.items.len();
        self.current_item = 0;
        self.visible = true;
    }

    /// Appends an item, rebinding it to the list's geometry and palette.
    /// List items are square-cornered.
    pub fn add_item(&mut self, mut item: Button, label: &str) {
        let index = self.items.len() as i32;
        let bounds = Rectangle::new(
            Point::new(
                self.origin.x,
                self.origin.y + index * self.item_height as i32,
            ),
            Size::new(self.item_width, self.item_height),
        );
        item.bind(bounds, self.bg, self.fg, label);
        item.set_radius(0);
        self.items.push(item);
    }

    /// Selection, scroll and every item back to their initial state.
    pub fn reset(&mut self) {
        self.current_item = 0;
        self.prev_item = None;
        self.current_visible_item = 0;
        self.scroll_position = 0;
        self.invalidate_all();
    }

    /// Forces every item to repaint on the next draw.
    pub fn invalidate_all(&mut self) {
        for item in &mut self.items {
            item.reset();
        }
    }

    /// Direct selection write; the index is not validated.
    pub fn set_current_item(&mut self, item: usize) {
        self.current_item = item;
    }

    pub fn current_item(&self) -> usize {
        self.current_item
    }

    pub fn scroll_position(&self) -> usize {
        self.scroll_position
    }

    pub fn focused_row(&self) -> usize {
        self.current_visible_item
    }

    pub fn visible_count(&self) -> usize {
        self.visible_count
    }

    pub fn set_visible_count(&mut self, count: usize) {
        self.visible_count = count;
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn items(&self) -> &[Button] {
        &self.items
    }

    pub fn items_mut(&mut self) -> &mut [Button] {
        &mut self.items
    }

    pub fn item_mut(&mut self, index: usize) -> Option<&mut Button> {
        self.items.get_mut(index)
    }

    /// Advances the selection, wrapping from the last item back to the
    /// first. The whole list repaints.
    pub fn to_next_item(&mut self) {
        if self.current_item + 1 < self.items.len() {
            self.current_item += 1;
        } else {
            self.current_item = 0;
        }
        self.invalidate_all();
    }

    /// Moves the selection back, wrapping from the first item to the
    /// last. The whole list repaints.
    pub fn to_prev_item(&mut self) {
        if self.current_item > 0 {
            self.current_item -= 1;
        } else {
            self.current_item = self.items.len().saturating_sub(1);
        }
        self.invalidate_all();
    }

    /// Moves the selection down by one, clamped at the end. The window
    /// shifts only when the selection would leave it, and the list only
    /// repaints when the selection actually moved.
    pub fn scroll_down(&mut self) {
        if self.current_item + 1 < self.items.len() {
            self.current_item += 1;
            if self.current_item - self.scroll_position >= self.visible_count {
                self.scroll_position += 1;
            }
            self.current_visible_item = self.current_item - self.scroll_position;
        }
        if self.prev_item != Some(self.current_item) {
            log::trace!("list scroll down to {}", self.current_item);
            self.invalidate_all();
        }
        self.prev_item = Some(self.current_item);
    }

    /// Moves the selection up by one, clamped at the start.
    pub fn scroll_up(&mut self) {
        if self.current_item > 0 {
            self.current_item -= 1;
            if self.current_item < self.scroll_position {
                self.scroll_position -= 1;
            }
            self.current_visible_item = self.current_item - self.scroll_position;
        }
        if self.prev_item != Some(self.current_item) {
            log::trace!("list scroll up to {}", self.current_item);
            self.invalidate_all();
        }
        self.prev_item = Some(self.current_item);
    }

    pub fn set_text_align(&mut self, align: Align) {
        for item in &mut self.items {
            item.set_label_align(align);
        }
    }

    pub fn set_text_padding(&mut self, x: i32, y: i32) {
        for item in &mut self.items {
            item.set_label_offset(x, y);
        }
    }

    pub fn show(&mut self) {
        self.visible = true;
    }

    pub fn hide(&mut self) {
        self.visible = false;
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    /// Polls the visible items once and reports the global index of the
    /// first completed press, if any.
    pub fn poll<T: TouchSource>(&mut self, touch: &mut T) -> Option<usize> {
        if !self.visible {
            return None;
        }

        let mut pressed = None;
        for row in 0..self.visible_count {
            let index = self.scroll_position + row;
            let Some(item) = self.items.get_mut(index) else {
                break;
            };
            item.poll(touch);
            if pressed.is_none() && item.is_pressed() {
                pressed = Some(index);
            }
        }
        pressed
    }

    /// Draws the visible window. The focused row gets the focus palette,
    /// the rest the normal palette; items are repositioned to their
    /// window-relative rows before delegating to their own draw.
    pub fn draw<S: DrawSurface>(&mut self, surface: &mut S) -> Result<(), S::Error> {
        if !self.visible {
            return Ok(());
        }

        for row in 0..self.visible_count {
            let index = self.scroll_position + row;
            if index >= self.items.len() {
                break;
            }

            let focused = row == self.current_visible_item;
            let (fill, label) = if focused {
                (self.focus_bg, self.focus_fg)
            } else {
                (self.bg, self.fg)
            };

            let item = &mut self.items[index];
            item.set_fill_color(fill);
            item.set_label_color(label);
            item.set_position(
                self.origin.x,
                self.origin.y + row as i32 * self.item_height as i32,
            );
            item.draw(surface)?;
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::styling::{BLACK, WHITE, YELLOW};
    use crate::test_support::{RecordingSurface, ScriptedTouch, SurfaceOp};

    const FOCUS_BG: Rgb565 = YELLOW;

    fn list_with(items: usize) -> List {
        let mut list = List::new(0, 40, 100, 20, WHITE, BLACK, BLACK, FOCUS_BG);
        for i in 0..items {
            let mut label = heapless::String::<8>::new();
            core::fmt::Write::write_fmt(&mut label, format_args!("item{i}")).ok();
            list.add_item(Button::default(), &label);
        }
        list
    }

    #[test]
    fn visible_window_is_sized_at_bind_time() {
        let list = list_with(5);
        // Bind ran before any item existed; the window must be sized
        // explicitly.
        assert_eq!(list.visible_count(), 0);

        let mut surface = RecordingSurface::new();
        let mut list = list;
        list.draw(&mut surface).unwrap();
        assert_eq!(surface.op_count(), 0);
    }

    #[test]
    fn scroll_down_tracks_window_and_selection() {
        let mut list = list_with(5);
        list.set_visible_count(3);

        for _ in 0..4 {
            list.scroll_down();
        }

        assert_eq!(list.current_item(), 4);
        assert_eq!(list.scroll_position(), 2);
        assert_eq!(list.focused_row(), 2);
    }

    #[test]
    fn scroll_down_clamps_at_end() {
        let mut list = list_with(5);
        list.set_visible_count(3);

        for _ in 0..10 {
            list.scroll_down();
        }

        // scroll == max(0, min(N, C-V)), current == min(N, C-1)
        assert_eq!(list.current_item(), 4);
        assert_eq!(list.scroll_position(), 2);
    }

    #[test]
    fn scroll_up_returns_to_start() {
        let mut list = list_with(5);
        list.set_visible_count(3);

        for _ in 0..4 {
            list.scroll_down();
        }
        for _ in 0..10 {
            list.scroll_up();
        }

        assert_eq!(list.current_item(), 0);
        assert_eq!(list.scroll_position(), 0);
        assert_eq!(list.focused_row(), 0);
    }

    #[test]
    fn stepping_wraps_around() {
        let mut list = list_with(3);
        list.set_current_item(2);
        list.to_next_item();
        assert_eq!(list.current_item(), 0);
        list.to_prev_item();
        assert_eq!(list.current_item(), 2);
    }

    #[test]
    fn draw_positions_items_in_window_rows() {
        let mut list = list_with(5);
        list.set_visible_count(3);
        for _ in 0..4 {
            list.scroll_down();
        }

        let mut surface = RecordingSurface::new();
        list.draw(&mut surface).unwrap();

        let fills: alloc::vec::Vec<_> = surface
            .ops
            .iter()
            .filter_map(|op| match op {
                SurfaceOp::FillRoundedRect { rect, color, .. } => Some((*rect, *color)),
                _ => None,
            })
            .collect();

        // Window shows items 2..5 at rows 0..3; the last row is focused.
        assert_eq!(fills.len(), 3);
        assert_eq!(fills[0].0.top_left, Point::new(0, 40));
        assert_eq!(fills[1].0.top_left, Point::new(0, 60));
        assert_eq!(fills[2].0.top_left, Point::new(0, 80));
        assert_eq!(fills[0].1, BLACK);
        assert_eq!(fills[1].1, BLACK);
        assert_eq!(fills[2].1, FOCUS_BG);
    }

    #[test]
    fn unchanged_list_redraw_issues_no_ops() {
        let mut list = list_with(3);
        list.set_visible_count(3);

        let mut surface = RecordingSurface::new();
        list.draw(&mut surface).unwrap();
        assert!(surface.op_count() > 0);

        surface.clear();
        list.draw(&mut surface).unwrap();
        assert_eq!(surface.op_count(), 0);

        // A selection change repaints the whole window.
        list.scroll_down();
        list.draw(&mut surface).unwrap();
        assert_eq!(surface.strings().len(), 3);
    }

    #[test]
    fn scroll_without_movement_does_not_invalidate() {
        let mut list = list_with(1);
        list.set_visible_count(1);

        let mut surface = RecordingSurface::new();
        list.draw(&mut surface).unwrap();
        // First call records prev_item and repaints once.
        list.scroll_down();
        list.draw(&mut surface).unwrap();

        surface.clear();
        // Clamped at the only item: no change, no repaint.
        list.scroll_down();
        list.draw(&mut surface).unwrap();
        assert_eq!(surface.op_count(), 0);
    }

    #[test]
    fn items_are_square_and_use_list_palette() {
        let mut list = list_with(1);
        list.set_visible_count(1);

        let mut surface = RecordingSurface::new();
        list.draw(&mut surface).unwrap();

        assert!(matches!(
            surface.ops[0],
            SurfaceOp::FillRoundedRect { radius: 0, .. }
        ));
        let strings = surface.strings();
        // Focused single row: focus palette applies.
        assert_eq!(strings, [("item0".into(), BLACK, FOCUS_BG)]);
    }

    #[test]
    fn poll_reports_pressed_item() {
        let mut list = list_with(3);
        list.set_visible_count(3);
        let mut touch = ScriptedTouch::new();
        let mut surface = RecordingSurface::new();
        list.draw(&mut surface).unwrap();

        // Rows are 20px tall starting at y=40: row 1 is item 1.
        touch.press(10, 65, 1);
        assert_eq!(list.poll(&mut touch), None);
        touch.release();
        assert_eq!(list.poll(&mut touch), Some(1));
        assert_eq!(list.poll(&mut touch), None);
    }
}
