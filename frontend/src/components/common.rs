use crate::api::{EmployeeStatus, LeaveStatus};
use leptos::*;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum ButtonVariant {
    #[default]
    Primary,
    Outline,
    Ghost,
    Success,
    Danger,
}

impl ButtonVariant {
    pub fn classes(&self) -> &'static str {
        match self {
            ButtonVariant::Primary => "bg-action-primary-bg hover:bg-action-primary-bg-hover text-action-primary-text shadow-sm",
            ButtonVariant::Outline => "border border-border-strong text-fg hover:bg-surface-muted",
            ButtonVariant::Ghost => "text-fg-muted hover:text-fg hover:bg-action-ghost-bg-hover",
            ButtonVariant::Success => "bg-status-success-bg hover:opacity-90 text-status-success-text border border-status-success-border",
            ButtonVariant::Danger => "bg-action-danger-bg hover:bg-action-danger-bg-hover text-action-danger-text",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum ButtonSize {
    Small,
    #[default]
    Medium,
}

impl ButtonSize {
    pub fn classes(&self) -> &'static str {
        match self {
            ButtonSize::Small => "px-2.5 py-1 text-xs",
            ButtonSize::Medium => "px-4 py-2 text-sm",
        }
    }
}

#[component]
pub fn Button(
    #[prop(optional)] variant: ButtonVariant,
    #[prop(optional)] size: ButtonSize,
    #[prop(optional, into)] class: String,
    #[prop(optional, into)] disabled: MaybeSignal<bool>,
    #[prop(optional, into)] loading: MaybeSignal<bool>,
    #[prop(attrs)] attributes: Vec<(&'static str, Attribute)>,
    children: Children,
) -> impl IntoView {
    view! {
        <button
            class=move || {
                format!(
                    "inline-flex items-center justify-center rounded-md font-semibold transition-colors duration-200 disabled:opacity-50 disabled:cursor-not-allowed {} {} {}",
                    size.classes(),
                    variant.classes(),
                    class
                )
            }
            disabled=move || disabled.get() || loading.get()
            {..attributes}
        >
            <Show when=move || loading.get()>
                <span class="mr-2 h-4 w-4 animate-spin rounded-full border-2 border-current border-t-transparent"></span>
            </Show>
            {children()}
        </button>
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BadgeTone {
    Neutral,
    Success,
    Warning,
    Danger,
}

impl BadgeTone {
    pub fn classes(&self) -> &'static str {
        match self {
            BadgeTone::Neutral => "bg-surface-muted text-fg-muted",
            BadgeTone::Success => "bg-status-success-bg text-status-success-text",
            BadgeTone::Warning => "bg-status-warning-bg text-status-warning-text",
            BadgeTone::Danger => "bg-status-error-bg text-status-error-text",
        }
    }
}

impl From<LeaveStatus> for BadgeTone {
    fn from(status: LeaveStatus) -> Self {
        match status {
            LeaveStatus::Pending => BadgeTone::Warning,
            LeaveStatus::Approved => BadgeTone::Success,
            LeaveStatus::Rejected => BadgeTone::Danger,
        }
    }
}

impl From<EmployeeStatus> for BadgeTone {
    fn from(status: EmployeeStatus) -> Self {
        match status {
            EmployeeStatus::Available => BadgeTone::Success,
            EmployeeStatus::NotAvailable => BadgeTone::Neutral,
        }
    }
}

#[component]
pub fn Badge(tone: BadgeTone, #[prop(into)] label: String) -> impl IntoView {
    view! {
        <span class=format!("inline-flex items-center rounded-full px-2.5 py-0.5 text-xs font-medium {}", tone.classes())>
            {label}
        </span>
    }
}
