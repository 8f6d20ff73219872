// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::{cell::RefCell, rc::Rc};

use serde::Serialize;
use serde_json::Value;

use crate::dispatcher::Dispatcher;
use crate::fields::{is_ready, render_fields};
use crate::locale::{TICKETS_TITLE, field_messages};
use crate::reducer::Action;
use crate::{
    Config, DateConverter, DraftStore, Error, EventDraft, FieldDescriptor, FieldPath, Localizer,
    MessageCatalog, SubmitButton, SubmitPayload, Tier, ZoneConverter, change, submit,
};

/// Event editor: the draft store plus the capabilities it needs.
#[derive(Debug)]
pub struct EventEditor<D = ZoneConverter, L = MessageCatalog> {
    store: DraftStore,
    dates: D,
    localizer: L,
    ticket_editor: bool,
    loading: bool,
}

impl EventEditor {
    /// Creates an editor using the jiff timezone database and the configured messages.
    pub fn new(source: Option<EventDraft>, config: &Config) -> Self {
        Self::with_capabilities(source, config, ZoneConverter, config.catalog())
    }
}

impl<D: DateConverter, L: Localizer> EventEditor<D, L> {
    /// Creates an editor with explicit date conversion and localization.
    pub fn with_capabilities(
        source: Option<EventDraft>,
        config: &Config,
        dates: D,
        localizer: L,
    ) -> Self {
        Self {
            store: DraftStore::new(source, config.default_timezone(), config.reset_on),
            dates,
            localizer,
            ticket_editor: config.ticket_editor_enabled(),
            loading: false,
        }
    }

    /// The draft store.
    pub fn store(&self) -> &DraftStore {
        &self.store
    }

    /// Applies one field edit: computes the partial update and merges it.
    pub fn apply_change(&mut self, path: &str, value: Value) -> Result<(), Error> {
        let path = FieldPath::parse(path)?;
        let patch = change::apply_change(self.store.draft(), &path, value, &self.dates)?;
        self.store.merge(&patch)
    }

    /// Runs an action, returning the payload when it was a submission.
    pub fn dispatch(&mut self, action: &Action) -> Result<Option<SubmitPayload>, Error> {
        self.store.dispatch(action, &self.dates)
    }

    /// Offers a refreshed source record. See [`DraftStore::refresh`].
    pub fn refresh(&mut self, source: Option<EventDraft>) -> bool {
        self.store.refresh(source)
    }

    /// Hands the current draft to `on_submit` without waiting on it.
    pub fn submit<F: FnOnce(SubmitPayload)>(&self, on_submit: F) {
        submit::submit(self.store.state(), on_submit);
    }

    /// Marks a submission as in flight, as reported by the caller.
    pub fn set_loading(&mut self, loading: bool) {
        self.loading = loading;
    }

    /// Whether the form has anything to render.
    pub fn is_ready(&self) -> bool {
        is_ready(self.store.draft())
    }

    /// The field descriptors, empty when the form is not ready.
    pub fn fields(&self) -> Result<Vec<FieldDescriptor>, Error> {
        render_fields(self.store.draft(), &self.localizer, &self.dates)
    }

    /// Props of the timezone picker.
    pub fn timezone_picker(&self) -> TimezonePickerProps {
        let label = field_messages("timezone")
            .map(|m| self.localizer.resolve(m.label))
            .unwrap_or_default();
        TimezonePickerProps {
            label,
            selected_timezone: self.store.draft().timezone.clone(),
        }
    }

    /// Props of the tier editor, `None` when it is switched off for this environment.
    pub fn tier_editor(&self) -> Option<TierEditorProps> {
        if !self.ticket_editor {
            return None;
        }

        let draft = self.store.draft();
        Some(TierEditorProps {
            title: self.localizer.resolve(TICKETS_TITLE),
            tiers: self.store.tiers().to_vec(),
            currency: draft
                .parent_collective
                .as_ref()
                .and_then(|a| a.currency.clone()),
        })
    }

    /// State of the submit button.
    pub fn submit_button(&self) -> SubmitButton {
        SubmitButton::new(self.store.state(), self.loading, &self.localizer)
    }

    /// Everything a renderer needs, or [`EditorView::NotReady`].
    pub fn view(&self) -> Result<EditorView, Error> {
        if !self.is_ready() {
            return Ok(EditorView::NotReady);
        }

        Ok(EditorView::Ready {
            fields: self.fields()?,
            timezone_picker: self.timezone_picker(),
            tier_editor: self.tier_editor(),
            submit_button: self.submit_button(),
        })
    }
}

impl<D: DateConverter + 'static, L: Localizer + 'static> EventEditor<D, L> {
    /// Subscribes the editor to `dispatcher`, sending submissions to `on_submit`.
    pub fn register_to<F>(that: Rc<RefCell<Self>>, dispatcher: &mut Dispatcher, mut on_submit: F)
    where
        F: FnMut(SubmitPayload) + 'static,
    {
        let callback = Rc::new(RefCell::new(
            move |action: &Action| -> Result<(), Error> {
                let submission = that.borrow_mut().dispatch(action)?;
                if let Some(payload) = submission {
                    on_submit(payload);
                }
                Ok(())
            },
        ));
        dispatcher.register(callback);
    }
}

/// What a renderer shows for the editor.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "state", rename_all = "kebab-case")]
pub enum EditorView {
    /// The draft has no owning collective, render nothing.
    NotReady,

    /// The form.
    #[serde(rename_all = "camelCase")]
    Ready {
        /// Generic fields, in order.
        fields: Vec<FieldDescriptor>,

        /// The timezone picker.
        timezone_picker: TimezonePickerProps,

        /// The tier editor, when enabled.
        tier_editor: Option<TierEditorProps>,

        /// The submit button.
        submit_button: SubmitButton,
    },
}

/// Contract with the timezone picker.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TimezonePickerProps {
    /// Localized label.
    pub label: String,

    /// The zone currently selected.
    pub selected_timezone: String,
}

impl TimezonePickerProps {
    /// The action emitted when the user picks `zone`.
    pub fn on_change(&self, zone: impl Into<String>) -> Action {
        Action::ChangeTimezone(zone.into())
    }
}

/// Contract with the tier editor.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TierEditorProps {
    /// Localized title.
    pub title: String,

    /// Tiers to edit.
    pub tiers: Vec<Tier>,

    /// Currency of the owning collective.
    pub currency: Option<String>,
}

impl TierEditorProps {
    /// The action emitted when the tier editor reports new tiers.
    pub fn on_change(&self, tiers: Vec<Tier>) -> Action {
        Action::SetTiers(tiers)
    }
}
