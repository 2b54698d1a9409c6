use super::colors::Palette;
use ratatui::style::{Modifier, Style};
use stagiaire_domain::{InternStatus, NotificationKind, ProjectStatus, TaskPriority, TaskStatus};

pub fn base(p: &Palette) -> Style {
    Style::default().fg(p.text).bg(p.background)
}

pub fn focused_border(p: &Palette) -> Style {
    Style::default().fg(p.focused_border)
}

pub fn unfocused_border(p: &Palette) -> Style {
    Style::default().fg(p.unfocused_border)
}

pub fn drop_target_border(p: &Palette) -> Style {
    Style::default()
        .fg(p.drop_target)
        .add_modifier(Modifier::BOLD)
}

pub fn selected_item(p: &Palette, focused: bool) -> Style {
    if focused {
        Style::default().bg(p.selected_bg).fg(p.selected_fg)
    } else {
        Style::default()
    }
}

/// The task being carried across columns.
pub fn dragged_item(p: &Palette) -> Style {
    Style::default()
        .fg(p.drop_target)
        .add_modifier(Modifier::BOLD | Modifier::ITALIC)
}

pub fn active_item(p: &Palette) -> Style {
    Style::default().fg(p.accent).add_modifier(Modifier::BOLD)
}

pub fn label_text(p: &Palette) -> Style {
    Style::default().fg(p.muted_text)
}

pub fn title_text(p: &Palette) -> Style {
    Style::default().fg(p.accent).add_modifier(Modifier::BOLD)
}

pub fn error_text(p: &Palette) -> Style {
    Style::default().fg(p.error)
}

pub fn done_text(p: &Palette) -> Style {
    Style::default()
        .fg(p.muted_text)
        .add_modifier(Modifier::CROSSED_OUT)
}

pub fn priority_style(p: &Palette, priority: TaskPriority) -> Style {
    let color = match priority {
        TaskPriority::High => p.error,
        TaskPriority::Medium => p.warning,
        TaskPriority::Low => p.muted_text,
    };
    Style::default().fg(color)
}

pub fn task_status_style(p: &Palette, status: TaskStatus) -> Style {
    let color = match status {
        TaskStatus::Todo => p.muted_text,
        TaskStatus::InProgress => p.info,
        TaskStatus::Done => p.success,
        TaskStatus::Bug => p.error,
    };
    Style::default().fg(color)
}

pub fn project_status_style(p: &Palette, status: ProjectStatus) -> Style {
    let color = match status {
        ProjectStatus::Todo => p.warning,
        ProjectStatus::InProgress => p.info,
        ProjectStatus::Done => p.success,
    };
    Style::default().fg(color)
}

pub fn intern_status_style(p: &Palette, status: InternStatus) -> Style {
    match status {
        InternStatus::Active => Style::default().fg(p.success),
        InternStatus::Inactive => Style::default().fg(p.muted_text),
    }
}

pub fn notification_style(p: &Palette, kind: NotificationKind) -> Style {
    let color = match kind {
        NotificationKind::Success => p.success,
        NotificationKind::Warning => p.warning,
        NotificationKind::Info => p.info,
        NotificationKind::Error => p.error,
    };
    Style::default().fg(color)
}
