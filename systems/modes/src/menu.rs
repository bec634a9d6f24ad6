use glam::Vec2;
use pirate_fleet_core::{
    FontRole, FrameView, GameModeId, InputEvent, Key, MenuEntry, MenuView, MouseButton, TextView,
    WINDOW_TITLE,
};

use crate::{GameContext, ModeError};

const TITLE_POSITION: Vec2 = Vec2::new(100.0, 60.0);
const FIRST_ENTRY: Vec2 = Vec2::new(100.0, 260.0);
const ENTRY_SIZE: Vec2 = Vec2::new(600.0, 140.0);
const ENTRY_SPACING: f32 = 160.0;

/// Title screen listing [`MenuEntry::ALL`].
///
/// Arrow keys move the highlight and wrap around, Enter or Space confirms it.
/// Hovering an entry highlights it and clicking an entry confirms that entry.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct StartMenu {
    highlighted: usize,
    confirmed: Option<MenuEntry>,
}

impl StartMenu {
    /// Creates a menu with the first entry highlighted.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Entry that Enter would confirm.
    #[must_use]
    pub fn highlighted(&self) -> MenuEntry {
        MenuEntry::ALL[self.highlighted]
    }

    /// Screen rectangle covered by the entry at `index`, as top-left and size.
    #[must_use]
    pub fn entry_bounds(index: usize) -> (Vec2, Vec2) {
        let top_left = FIRST_ENTRY + Vec2::new(0.0, ENTRY_SPACING * index as f32);
        (top_left, ENTRY_SIZE)
    }

    pub(crate) fn handle_input(&mut self, event: InputEvent) {
        let count = MenuEntry::ALL.len();
        match event {
            InputEvent::KeyDown(Key::Up) => self.highlighted = (self.highlighted + count - 1) % count,
            InputEvent::KeyDown(Key::Down) => self.highlighted = (self.highlighted + 1) % count,
            InputEvent::KeyDown(Key::Enter | Key::Space) => {
                self.confirmed = Some(self.highlighted());
            }
            InputEvent::MouseMotion { position } => {
                if let Some(index) = entry_at(position) {
                    self.highlighted = index;
                }
            }
            InputEvent::MouseDown {
                position,
                button: MouseButton::Left,
            } => {
                self.confirmed = entry_at(position).map(|index| MenuEntry::ALL[index]);
            }
            _ => {}
        }
    }

    pub(crate) fn update(&mut self) -> GameModeId {
        match self.confirmed.take() {
            Some(MenuEntry::Start) => GameModeId::Gameplay,
            Some(MenuEntry::Quit) => GameModeId::Exit,
            None => GameModeId::StartMenu,
        }
    }

    pub(crate) fn render(&self, context: &GameContext) -> Result<FrameView, ModeError> {
        let title_font = context.fonts().get(FontRole::Scoreboard)?;
        let entry_font = context.fonts().get(FontRole::Menu)?;

        let entries = MenuEntry::ALL
            .iter()
            .enumerate()
            .map(|(index, entry)| TextView {
                content: entry.label().to_owned(),
                font: entry_font,
                position: Self::entry_bounds(index).0,
            })
            .collect();

        Ok(FrameView::Menu(MenuView {
            title: TextView {
                content: WINDOW_TITLE.to_owned(),
                font: title_font,
                position: TITLE_POSITION,
            },
            entries,
            highlighted: self.highlighted,
        }))
    }
}

fn entry_at(position: Vec2) -> Option<usize> {
    (0..MenuEntry::ALL.len()).find(|&index| {
        let (top_left, size) = StartMenu::entry_bounds(index);
        let bottom_right = top_left + size;
        position.x >= top_left.x
            && position.y >= top_left.y
            && position.x < bottom_right.x
            && position.y < bottom_right.y
    })
}
