//! Module trait for the section views

use crossterm::event::KeyEvent;
use ratatui::layout::Rect;
use ratatui::Frame;

use super::{Action, Context};
use crate::modules::listing::ListingState;

/// A section view: owns its local UI state, handles keys, renders its body.
pub trait Module {
    /// Handle keyboard input
    /// Returns an Action describing what should happen
    fn handle_key(&mut self, key: KeyEvent, ctx: &mut Context) -> Action;

    /// Render the section body
    fn render(&self, f: &mut Frame, area: Rect, ctx: &Context);

    /// Search/filter state, for views that list records
    fn listing(&self) -> Option<&ListingState> {
        None
    }

    fn listing_mut(&mut self) -> Option<&mut ListingState> {
        None
    }

    /// Number of records passing the current search/filter
    fn visible_len(&self, _ctx: &Context) -> usize {
        0
    }

    /// Status values the `f` key cycles through
    fn status_filters(&self) -> &'static [&'static str] {
        &[]
    }

    /// `gg` / `G`: move to the first or last row
    fn jump(&mut self, top: bool, ctx: &Context) {
        let len = self.visible_len(ctx);
        if let Some(listing) = self.listing_mut() {
            if top {
                listing.top();
            } else {
                listing.bottom(len);
            }
        }
    }
}
