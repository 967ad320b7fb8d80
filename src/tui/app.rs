//! Application state for the TUI.

use std::{
    io,
    time::{Duration, Instant},
};

use chrono::Datelike;
use crossterm::event::{
    Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Position, Rect},
    widgets::StatefulWidget,
    Frame,
};
use tracing::{debug, info, warn};

use super::{
    pages::{render_page, Link, PageView},
    state::{PageId, ThemeMode, UiState},
    widgets::{
        footer::{footer_text, Footer},
        header::{Header, HEADER_HEIGHT},
        help_menu::{HelpMenu, HelpMenuWidget},
        nav_menu::{MenuAction, NavMenu, NavMenuInput, NavMenuWidget},
        page_canvas::{layout_page, PageCanvas, PageLayout},
        selection::{ClickRegions, ClickTarget},
        status_bar::{StatusBar, StatusBarInput, StatusBarWidget},
        theme::resolve_theme,
        InteractiveStatefulWidget,
    },
};
use crate::{
    animation::{BlockId, EngineSlot, EntranceAnimator, Transform},
    content::{ContentStore, CONTENT},
};

const ANIMATING_FRAME: Duration = Duration::from_millis(16);
const IDLE_FRAME: Duration = Duration::from_millis(250);
const FOOTER_HEIGHT: u16 = 2;
const WHEEL_STEP: i32 = 3;

/// Remount key: a change replays every card's entrance.
type MountKey = (PageId, ThemeMode);

type Opener = Box<dyn Fn(&str) -> io::Result<()>>;

/// The current page's view model and its layout at the last width.
struct MountedView {
    key: MountKey,
    view: PageView,
    layout: PageLayout,
}

/// Application state.
pub struct App {
    content: &'static ContentStore,
    state: UiState,
    animator: EntranceAnimator<MountKey>,
    engine: EngineSlot,
    help: HelpMenu,
    menu: NavMenu,
    status: StatusBar,
    mounted: Option<MountedView>,
    /// First visible row of the page.
    scroll: u16,
    max_scroll: u16,
    page_area: Rect,
    mouse: Option<Position>,
    /// Click regions from the last frame, in screen coordinates.
    regions: ClickRegions,
    handle: String,
    footer: String,
    opener: Opener,
    /// Whether app should exit.
    pub should_exit: bool,
}

impl App {
    pub fn new(state: UiState, engine: EngineSlot) -> Self {
        let content = &CONTENT;
        Self {
            content,
            state,
            animator: EntranceAnimator::default(),
            engine,
            help: HelpMenu::default(),
            menu: NavMenu::default(),
            status: StatusBar::default(),
            mounted: None,
            scroll: 0,
            max_scroll: 0,
            page_area: Rect::default(),
            mouse: None,
            regions: ClickRegions::default(),
            handle: content.profile.contact.github_handle(),
            footer: footer_text(chrono::Local::now().year(), content.profile.name),
            opener: Box::new(|target| open::that_detached(target)),
            should_exit: false,
        }
    }

    /// Replace the system link opener.
    #[cfg(test)]
    #[must_use]
    pub fn with_opener(mut self, opener: impl Fn(&str) -> io::Result<()> + 'static) -> Self {
        self.opener = Box::new(opener);
        self
    }

    /// How long the event loop may wait before the next frame.
    pub fn frame_interval(&self) -> Duration {
        if self.is_animating() || self.engine.is_loading() {
            ANIMATING_FRAME
        } else {
            IDLE_FRAME
        }
    }

    pub fn is_animating(&self) -> bool {
        !self.animator.is_idle()
    }

    pub fn render(&mut self, frame: &mut Frame) {
        self.render_at(frame, Instant::now());
    }

    fn render_at(&mut self, frame: &mut Frame, now: Instant) {
        self.engine.poll();
        let tokens = resolve_theme(self.state.theme());
        let [header_area, page_area, footer_area, status_area] = Layout::vertical([
            Constraint::Length(HEADER_HEIGHT),
            Constraint::Fill(1),
            Constraint::Length(FOOTER_HEIGHT),
            Constraint::Length(1),
        ])
        .areas(frame.area());
        self.page_area = page_area;

        self.mount(page_area.width, now);
        self.regions.clear();

        frame.render_stateful_widget(
            Header::new(&self.state, tokens, &self.handle).mouse(self.mouse),
            header_area,
            &mut self.regions,
        );
        self.render_page(frame.buffer_mut(), page_area, now);
        frame.render_widget(Footer::new(&self.footer, tokens), footer_area);

        StatusBarWidget::update_state(
            &mut self.status,
            StatusBarInput {
                page: self.state.page(),
                theme: self.state.theme(),
                animations: self.engine.status(),
            },
        );
        frame.render_stateful_widget(StatusBarWidget::new(tokens), status_area, &mut self.status);

        self.sync_menu();
        frame.render_stateful_widget(
            NavMenuWidget::new(tokens, self.state.page(), self.mouse),
            frame.area(),
            &mut self.menu,
        );
        self.regions.extend(self.menu.take_regions().take());
        frame.render_stateful_widget(HelpMenuWidget::new(tokens), frame.area(), &mut self.help);

        self.animator.advance(now);
    }

    /// Rebuild the view when the page, theme or width changed and mount its
    /// cards. Entrances start once per mount.
    fn mount(&mut self, width: u16, now: Instant) {
        let key = (self.state.page(), self.state.theme());
        if self.mounted.as_ref().map_or(true, |mounted| mounted.key != key) {
            let view = render_page(key.0, self.content, resolve_theme(key.1));
            let layout = layout_page(&view, width);
            debug!(page = ?view.page, width, cards = layout.cards.len(), "page mounted");
            self.mounted = Some(MountedView { key, view, layout });
            self.scroll = 0;
        } else if let Some(mounted) = self
            .mounted
            .as_mut()
            .filter(|mounted| mounted.layout.width != width)
        {
            mounted.layout = layout_page(&mounted.view, width);
        }
        let Some(mounted) = &self.mounted else {
            return;
        };
        if self
            .animator
            .mount(key, mounted.view.cards().map(|card| card.entrance))
        {
            self.animator.start(self.engine.engine(), now);
        }
    }

    fn render_page(&mut self, buf: &mut Buffer, area: Rect, now: Instant) {
        let Some(mounted) = &self.mounted else {
            return;
        };
        let tokens = resolve_theme(self.state.theme());
        let layout = &mounted.layout;
        self.max_scroll = layout.height.saturating_sub(area.height);
        self.scroll = self.scroll.min(self.max_scroll);

        let transforms: Vec<Transform> = (0..layout.cards.len())
            .map(|idx| self.animator.transform(BlockId(idx), now))
            .collect();
        let hovered = self
            .mouse
            .filter(|mouse| area.contains(*mouse))
            .and_then(|mouse| layout.block_at(mouse.x - area.x, mouse.y - area.y + self.scroll));

        let canvas_area = Rect::new(0, 0, area.width, layout.height.max(area.height));
        let mut canvas = Buffer::empty(canvas_area);
        let mut page_regions = ClickRegions::default();
        PageCanvas::new(&mounted.view, layout, tokens, &transforms)
            .hovered(hovered)
            .render(canvas_area, &mut canvas, &mut page_regions);

        blit(&canvas, buf, area, self.scroll);
        for region in page_regions.take() {
            if let Some(visible) = to_screen(region.area, area, self.scroll) {
                self.regions.add(visible, region.target);
            }
        }
    }

    fn sync_menu(&mut self) {
        NavMenuWidget::update_state(
            &mut self.menu,
            NavMenuInput {
                open: self.state.menu_open(),
                current: self.state.page(),
            },
        );
    }

    /// Handle terminal event.
    pub fn handle_event(&mut self, event: &Event) {
        match event {
            Event::Key(key) if key.kind == KeyEventKind::Press => self.handle_key(*key),
            Event::Mouse(mouse) => self.handle_mouse(*mouse),
            _ => {}
        }
    }

    fn handle_key(&mut self, key: KeyEvent) {
        if HelpMenuWidget::handle_event(&mut self.help, key) {
            return;
        }
        self.sync_menu();
        if NavMenuWidget::handle_event(&mut self.menu, key) {
            match self.menu.take_action() {
                Some(MenuAction::Select(page)) => self.state.select_page(page),
                Some(MenuAction::Close) => self.state.close_menu(),
                None => {}
            }
            return;
        }

        match key.code {
            KeyCode::Char('q') => self.should_exit = true,
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.should_exit = true;
            }
            KeyCode::Char('?') => self.help.toggle(),
            KeyCode::Char(digit @ '1'..='5') => {
                let idx = usize::from(digit as u8 - b'1');
                self.state.select_page(PageId::ALL[idx]);
            }
            KeyCode::Tab | KeyCode::Char(']') => self.state.next_page(),
            KeyCode::BackTab | KeyCode::Char('[') => self.state.prev_page(),
            KeyCode::Char('t') => self.state.toggle_theme(),
            KeyCode::Char('m') => self.state.open_menu(),
            KeyCode::Esc => self.state.close_menu(),
            KeyCode::Char('o') => {
                self.open_link(&Link::Web(self.content.profile.contact.github.to_string()));
            }
            KeyCode::Char('e') => {
                self.open_link(&Link::Mail(self.content.profile.contact.email.to_string()));
            }
            KeyCode::Char('j') | KeyCode::Down => self.scroll_by(1),
            KeyCode::Char('k') | KeyCode::Up => self.scroll_by(-1),
            KeyCode::PageDown => self.scroll_by(i32::from(self.page_area.height)),
            KeyCode::PageUp => self.scroll_by(-i32::from(self.page_area.height)),
            KeyCode::Home => self.scroll = 0,
            KeyCode::End => self.scroll = self.max_scroll,
            _ => {}
        }
    }

    fn handle_mouse(&mut self, mouse: MouseEvent) {
        let position = Position::new(mouse.column, mouse.row);
        match mouse.kind {
            MouseEventKind::Moved => self.mouse = Some(position),
            MouseEventKind::Down(MouseButton::Left) => {
                self.mouse = Some(position);
                // The help popup has no targets of its own; a click dismisses it.
                if self.help.is_visible() {
                    self.help.toggle();
                    return;
                }
                if let Some(target) = self.regions.hit(position.x, position.y).cloned() {
                    self.activate(target);
                }
            }
            MouseEventKind::ScrollDown => self.scroll_by(WHEEL_STEP),
            MouseEventKind::ScrollUp => self.scroll_by(-WHEEL_STEP),
            _ => {}
        }
    }

    fn activate(&mut self, target: ClickTarget) {
        match target {
            ClickTarget::Page(page) => self.state.select_page(page),
            ClickTarget::ToggleTheme => self.state.toggle_theme(),
            ClickTarget::OpenMenu => self.state.open_menu(),
            ClickTarget::CloseMenu => self.state.close_menu(),
            ClickTarget::Link(link) => self.open_link(&link),
        }
    }

    fn open_link(&self, link: &Link) {
        let target = link.target();
        info!(%target, "opening link");
        if let Err(err) = (self.opener)(&target) {
            warn!(%target, %err, "failed to open link");
        }
    }

    fn scroll_by(&mut self, delta: i32) {
        let scroll = (i32::from(self.scroll) + delta).clamp(0, i32::from(self.max_scroll));
        self.scroll = u16::try_from(scroll).unwrap_or(self.max_scroll);
    }
}

/// Copy the window of `canvas` starting at row `scroll` into `area`.
fn blit(canvas: &Buffer, buf: &mut Buffer, area: Rect, scroll: u16) {
    for dy in 0..area.height {
        for dx in 0..area.width {
            let Some(cell) = canvas.cell((dx, dy + scroll)) else {
                continue;
            };
            if let Some(target) = buf.cell_mut((area.x + dx, area.y + dy)) {
                *target = cell.clone();
            }
        }
    }
}

/// Screen rectangle of a canvas rectangle, clipped to the visible window.
fn to_screen(rect: Rect, area: Rect, scroll: u16) -> Option<Rect> {
    let top = rect.y.max(scroll);
    let bottom = rect.bottom().min(scroll + area.height);
    (top < bottom).then(|| {
        Rect::new(
            area.x + rect.x,
            area.y + (top - scroll),
            rect.width,
            bottom - top,
        )
        .intersection(area)
    })
}
