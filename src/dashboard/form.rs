//! Link form: draft, mode and field validation

use std::collections::BTreeMap;

use crate::api::{Link, LinkPayload};

/// Editable fields, in tab order
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum FormField {
    CampaignTitle,
    OriginalUrl,
    Category,
}

impl FormField {
    pub const ALL: [FormField; 3] = [
        FormField::CampaignTitle,
        FormField::OriginalUrl,
        FormField::Category,
    ];

    pub fn next(&self) -> FormField {
        match self {
            FormField::CampaignTitle => FormField::OriginalUrl,
            FormField::OriginalUrl => FormField::Category,
            FormField::Category => FormField::CampaignTitle,
        }
    }

    pub fn prev(&self) -> FormField {
        match self {
            FormField::CampaignTitle => FormField::Category,
            FormField::OriginalUrl => FormField::CampaignTitle,
            FormField::Category => FormField::OriginalUrl,
        }
    }

    /// Wire name, used as the error-map key
    pub fn field_name(&self) -> &'static str {
        match self {
            FormField::CampaignTitle => "campaign_title",
            FormField::OriginalUrl => "original_url",
            FormField::Category => "category",
        }
    }

    pub fn display_title(&self) -> &'static str {
        match self {
            FormField::CampaignTitle => "Campaign Title",
            FormField::OriginalUrl => "Original URL",
            FormField::Category => "Category",
        }
    }

    pub fn mandatory_message(&self) -> String {
        format!("{} is mandatory", self.display_title())
    }
}

/// 表单草稿
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct LinkDraft {
    pub campaign_title: String,
    pub original_url: String,
    pub category: String,
}

impl LinkDraft {
    pub fn new(
        campaign_title: impl Into<String>,
        original_url: impl Into<String>,
        category: impl Into<String>,
    ) -> Self {
        Self {
            campaign_title: campaign_title.into(),
            original_url: original_url.into(),
            category: category.into(),
        }
    }

    pub fn from_link(link: &Link) -> Self {
        Self::new(&link.campaign_title, &link.original_url, &link.category)
    }

    pub fn get(&self, field: FormField) -> &str {
        match field {
            FormField::CampaignTitle => &self.campaign_title,
            FormField::OriginalUrl => &self.original_url,
            FormField::Category => &self.category,
        }
    }

    pub fn get_mut(&mut self, field: FormField) -> &mut String {
        match field {
            FormField::CampaignTitle => &mut self.campaign_title,
            FormField::OriginalUrl => &mut self.original_url,
            FormField::Category => &mut self.category,
        }
    }

    pub fn to_payload(&self) -> LinkPayload {
        LinkPayload {
            campaign_title: self.campaign_title.clone(),
            original_url: self.original_url.clone(),
            category: self.category.clone(),
        }
    }
}

/// Field-keyed validation messages
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FieldErrors(BTreeMap<FormField, String>);

impl FieldErrors {
    pub fn insert(&mut self, field: FormField, message: impl Into<String>) {
        self.0.insert(field, message.into());
    }

    pub fn get(&self, field: FormField) -> Option<&str> {
        self.0.get(&field).map(String::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn clear_field(&mut self, field: FormField) {
        self.0.remove(&field);
    }

    pub fn iter(&self) -> impl Iterator<Item = (FormField, &str)> {
        self.0.iter().map(|(f, m)| (*f, m.as_str()))
    }
}

impl std::fmt::Display for FieldErrors {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let messages: Vec<&str> = self.0.values().map(String::as_str).collect();
        write!(f, "{}", messages.join("; "))
    }
}

/// 校验草稿；每个字段独立检查
pub fn validate(draft: &LinkDraft) -> Result<(), FieldErrors> {
    let mut errors = FieldErrors::default();
    for field in FormField::ALL {
        if draft.get(field).is_empty() {
            errors.insert(field, field.mandatory_message());
        }
    }

    if errors.is_empty() { Ok(()) } else { Err(errors) }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormMode {
    Create,
    Edit { id: String },
}

/// Open form modal
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LinkForm {
    pub draft: LinkDraft,
    pub mode: FormMode,
    pub errors: FieldErrors,
    pub focused: FormField,
}

impl LinkForm {
    pub fn create() -> Self {
        Self::with_draft(LinkDraft::default(), FormMode::Create)
    }

    pub fn edit(link: &Link) -> Self {
        Self::with_draft(
            LinkDraft::from_link(link),
            FormMode::Edit {
                id: link.id.clone(),
            },
        )
    }

    pub fn with_draft(draft: LinkDraft, mode: FormMode) -> Self {
        Self {
            draft,
            mode,
            errors: FieldErrors::default(),
            focused: FormField::CampaignTitle,
        }
    }

    pub fn is_edit(&self) -> bool {
        matches!(self.mode, FormMode::Edit { .. })
    }

    pub fn title(&self) -> &'static str {
        if self.is_edit() { "Edit Link" } else { "Add Link" }
    }

    pub fn push_char(&mut self, c: char) {
        self.draft.get_mut(self.focused).push(c);
        self.errors.clear_field(self.focused);
    }

    pub fn pop_char(&mut self) {
        self.draft.get_mut(self.focused).pop();
    }

    pub fn focus_next(&mut self) {
        self.focused = self.focused.next();
    }

    pub fn focus_prev(&mut self) {
        self.focused = self.focused.prev();
    }
}
