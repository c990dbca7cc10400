//! Zellij plugin wrapper and entry point.
//!
//! This module is the thin integration layer between the reelsearch library
//! and the Zellij plugin system. It translates host events into library
//! events and library actions into host calls; every decision in between is
//! made by [`reelsearch::handle_event`].
//!
//! # Plugin Lifecycle
//!
//! 1. **Load**: Parse config, initialize tracing, create `AppState`
//! 2. **Permissions**: Request `WebAccess` for catalog requests
//! 3. **Subscribe**: `Key`, `Mouse`, `WebRequestResult`, `PermissionRequestResult`
//! 4. **Update**: Map events, delegate to the library, execute actions
//! 5. **Render**: Record the viewport, call the library renderer
//!
//! # Keybindings
//!
//! Global:
//! - `Ctrl+r`: Reset to the initial state
//!
//! While browsing results:
//! - `j`/`Down`, `k`/`Up`: Move selection
//! - `Enter`: Open details
//! - `h`/`Left`, `l`/`Right`: Previous / next page
//! - `g`, `G`: First / last page
//! - `/`: Edit the search
//! - `t`: Cycle the type filter
//! - `y`: Edit the year filter
//! - `c`: Clear filters
//! - `q`: Close the plugin
//!
//! While typing (search box or year filter):
//! - Characters are typed, `Backspace` deletes
//! - `Enter`: Submit
//! - `Esc`: Leave the field
//! - `Down`/`Up`: Move selection
//!
//! With the detail view open:
//! - `Esc`, `q`, `x`: Close
//!
//! Left clicks select result cards, focus the search box, and close the
//! detail view from its `[x]` control or from outside the box.

#![allow(clippy::multiple_crate_versions)]

use std::collections::BTreeMap;
use zellij_tile::prelude::*;

use reelsearch::{handle_event, Action, Config, Event, InputMode};

register_plugin!(State);

/// Plugin state wrapper around the library's `AppState`.
#[derive(Default)]
struct State {
    app: reelsearch::app::AppState,
}

impl ZellijPlugin for State {
    fn load(&mut self, configuration: BTreeMap<String, String>) {
        let config = Config::from_zellij(&configuration);
        reelsearch::observability::init_tracing(&config);

        let span = tracing::debug_span!("plugin_load");
        let _guard = span.entered();

        tracing::debug!(base_url = %config.base_url, theme = ?config.theme_name, "parsed configuration");
        self.app = reelsearch::initialize(&config);

        request_permission(&[PermissionType::WebAccess]);
        subscribe(&[
            EventType::Key,
            EventType::Mouse,
            EventType::WebRequestResult,
            EventType::PermissionRequestResult,
        ]);

        tracing::debug!("plugin load complete - waiting for permissions");
    }

    /// Returns `true` if the UI should re-render.
    fn update(&mut self, event: zellij_tile::prelude::Event) -> bool {
        let event_name = Self::get_event_name(&event);
        let span = tracing::debug_span!("plugin_update_event", event_type = %event_name);
        let _guard = span.entered();

        let our_event = match event {
            zellij_tile::prelude::Event::Key(ref key) => match self.map_key_event(key) {
                Some(event) => event,
                None => return false,
            },
            zellij_tile::prelude::Event::Mouse(mouse) => match Self::map_mouse_event(mouse) {
                Some(event) => event,
                None => return false,
            },
            zellij_tile::prelude::Event::WebRequestResult(status, _headers, body, context) => {
                Event::CatalogResponse { status, body, context }
            }
            zellij_tile::prelude::Event::PermissionRequestResult(status) => Event::PermissionsResult {
                granted: matches!(status, PermissionStatus::Granted),
            },
            _ => return false,
        };

        match handle_event(&mut self.app, &our_event) {
            Ok((should_render, actions)) => {
                tracing::debug!(action_count = actions.len(), should_render, "event handled");
                for action in actions {
                    Self::execute_action(&action);
                }
                should_render
            }
            Err(e) => {
                tracing::warn!(error = %e, "error handling event");
                false
            }
        }
    }

    fn render(&mut self, rows: usize, cols: usize) {
        self.app.set_viewport(rows, cols);
        reelsearch::ui::render(&self.app, rows, cols);
    }
}

impl State {
    fn get_event_name(event: &zellij_tile::prelude::Event) -> String {
        match event {
            zellij_tile::prelude::Event::Key(key) => format!("Key({:?})", key.bare_key),
            zellij_tile::prelude::Event::Mouse(..) => "Mouse".to_string(),
            zellij_tile::prelude::Event::WebRequestResult(status, ..) => format!("WebRequestResult({status})"),
            zellij_tile::prelude::Event::PermissionRequestResult(..) => "PermissionRequestResult".to_string(),
            _ => "Other".to_string(),
        }
    }

    /// Maps keyboard events to application events according to the current
    /// mode.
    fn map_key_event(&self, key: &KeyWithModifier) -> Option<Event> {
        if key.bare_key == BareKey::Char('r') && key.has_modifiers(&[KeyModifier::Ctrl]) {
            return Some(Event::Reset);
        }

        if self.app.detail.is_some() {
            return match key.bare_key {
                BareKey::Esc | BareKey::Char('q' | 'x') => Some(Event::CloseDetail),
                _ => None,
            };
        }

        if self.app.input_mode.is_editing() {
            return Some(match key.bare_key {
                BareKey::Enter => Event::Submit,
                BareKey::Esc => Event::Escape,
                BareKey::Backspace => Event::Backspace,
                BareKey::Down => Event::KeyDown,
                BareKey::Up => Event::KeyUp,
                BareKey::Char(c) => Event::Char(c),
                _ => return None,
            });
        }

        debug_assert_eq!(self.app.input_mode, InputMode::Browse);
        Some(match key.bare_key {
            BareKey::Down | BareKey::Char('j') => Event::KeyDown,
            BareKey::Up | BareKey::Char('k') => Event::KeyUp,
            BareKey::Enter => Event::OpenSelected,
            BareKey::Left | BareKey::Char('h') => Event::PrevPage,
            BareKey::Right | BareKey::Char('l') => Event::NextPage,
            BareKey::Char('g') => Event::GoToPage(1),
            BareKey::Char('G') => Event::GoToPage(self.app.search.total_pages()),
            BareKey::Char('/') => Event::FocusSearch,
            BareKey::Char('t') => Event::CycleType,
            BareKey::Char('y') => Event::EditYear,
            BareKey::Char('c') => Event::ClearFilters,
            BareKey::Char('q') => Event::CloseFocus,
            BareKey::Esc => Event::Escape,
            _ => return None,
        })
    }

    /// Zellij reports 0-based cells; the library works in 1-based rows and
    /// columns.
    fn map_mouse_event(mouse: Mouse) -> Option<Event> {
        match mouse {
            Mouse::LeftClick(line, col) => {
                let row = usize::try_from(line).ok()? + 1;
                Some(Event::Click { row, col: col + 1 })
            }
            _ => None,
        }
    }

    /// Request URLs carry the API key, so only the context is logged.
    #[tracing::instrument(level = "debug", skip_all)]
    fn execute_action(action: &Action) {
        match action {
            Action::CloseFocus => {
                tracing::debug!("closing plugin focus");
                hide_self();
            }
            Action::Fetch(request) => {
                tracing::debug!(context = ?request.context, "issuing catalog request");
                web_request(
                    &request.url,
                    HttpVerb::Get,
                    BTreeMap::new(),
                    Vec::new(),
                    request.context.to_map(),
                );
            }
        }
    }
}
