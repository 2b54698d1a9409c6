use crate::app::{App, LoginField, Screen, TaskForm, TaskFormField};
use crate::components::{centered_box, render_metric_card};
use crate::theme::*;
use chrono::{Local, Timelike};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Position, Rect},
    style::Modifier,
    text::{Line, Span},
    widgets::{Block, Borders, Clear, List, ListItem, Paragraph, Row, Table, Wrap},
    Frame,
};
use stagiaire_core::StagiaireError;
use stagiaire_domain::metrics::greeting;
use stagiaire_domain::{InternFilter, Section, StagiaireOperations, TaskStatus};
use std::collections::HashMap;

pub fn render(app: &App, frame: &mut Frame) {
    let p = app.palette();
    frame.render_widget(Block::default().style(base(p)), frame.area());

    match app.screen {
        Screen::Login => render_login(app, frame),
        Screen::Main => {
            let chunks = Layout::default()
                .direction(Direction::Vertical)
                .constraints([Constraint::Min(0), Constraint::Length(3)])
                .split(frame.area());

            render_main(app, frame, chunks[0]);
            render_footer(app, frame, chunks[1]);
        }
    }
}

fn render_login(app: &App, frame: &mut Frame) {
    let p = app.palette();
    let area = centered_box(72, 18, frame.area());

    let block = Block::default()
        .title(" Stagiaire360 ")
        .title_alignment(Alignment::Center)
        .borders(Borders::ALL)
        .border_style(focused_border(p));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2),
            Constraint::Length(3),
            Constraint::Length(3),
            Constraint::Length(2),
            Constraint::Min(0),
        ])
        .split(inner);

    frame.render_widget(
        Paragraph::new("Sign in to manage internships")
            .alignment(Alignment::Center)
            .style(label_text(p)),
        chunks[0],
    );

    let fields = [
        (LoginField::Email, "Email", app.login.email.display(), chunks[1]),
        (LoginField::Password, "Password", app.login.password.display(), chunks[2]),
    ];
    for (field, title, text, area) in fields {
        let focused = app.login.focus == field;
        let border = if focused { focused_border(p) } else { unfocused_border(p) };
        frame.render_widget(
            Paragraph::new(text).block(
                Block::default()
                    .title(title)
                    .borders(Borders::ALL)
                    .border_style(border),
            ),
            area,
        );
    }

    if let Some(error) = &app.login.error {
        frame.render_widget(
            Paragraph::new(error.as_str())
                .alignment(Alignment::Center)
                .style(error_text(p)),
            chunks[3],
        );
    }

    frame.render_widget(
        Paragraph::new(vec![
            Line::from("Enter: sign in  Tab: switch field  Esc: quit"),
            Line::from(Span::styled(
                "Demo accounts: rh@company.com, encadreur@company.com, stagiaire@company.com",
                label_text(p),
            )),
        ])
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true }),
        chunks[4],
    );

    let (input, area) = match app.login.focus {
        LoginField::Email => (&app.login.email, chunks[1]),
        LoginField::Password => (&app.login.password, chunks[2]),
    };
    frame.set_cursor_position(Position::new(
        area.x + 1 + input.cursor_column() as u16,
        area.y + 1,
    ));
}

fn render_main(app: &App, frame: &mut Frame, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Length(24), Constraint::Min(0)])
        .split(area);

    render_sidebar(app, frame, chunks[0]);

    let content = chunks[1];
    let result = match app.active_section() {
        Some(Section::Dashboard) | None => render_dashboard(app, frame, content),
        Some(Section::Interns) => render_interns(app, frame, content),
        Some(Section::Supervisors) => render_supervisors(app, frame, content),
        Some(Section::Projects) => render_projects(app, frame, content),
        Some(Section::Kanban) => render_kanban(app, frame, content),
        Some(Section::Reports) => render_reports(app, frame, content),
        Some(Section::Settings) => render_settings(app, frame, content),
    };
    if let Err(err) = result {
        render_error(app, frame, content, &err);
    }
}

fn render_sidebar(app: &App, frame: &mut Frame, area: Rect) {
    let p = app.palette();
    let Some(navigator) = app.navigator.as_ref() else {
        return;
    };

    let mut items: Vec<ListItem> = navigator
        .sections()
        .into_iter()
        .enumerate()
        .map(|(idx, section)| {
            let text = format!("{} {}", idx + 1, section.title());
            let style = if section == navigator.active() {
                active_item(p).add_modifier(Modifier::REVERSED)
            } else {
                base(p)
            };
            ListItem::new(Line::from(Span::styled(text, style)))
        })
        .collect();

    if let Ok(user) = app.workspace.current_user() {
        items.push(ListItem::new(""));
        items.push(ListItem::new(Span::styled(user.display_name(), title_text(p))));
        items.push(ListItem::new(Span::styled(user.role.label(), label_text(p))));
    }

    let list = List::new(items).block(
        Block::default()
            .title("Stagiaire360")
            .borders(Borders::ALL)
            .border_style(focused_border(p)),
    );
    frame.render_widget(list, area);
}

fn render_dashboard(app: &App, frame: &mut Frame, area: Rect) -> Result<(), StagiaireError> {
    let p = app.palette();
    let user = app.workspace.current_user()?;
    let metrics = app.workspace.dashboard_metrics()?;
    let activity = app.workspace.recent_activity(app.recent_activity_limit)?;
    let notifications = app.workspace.list_notifications()?;

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(4),
            Constraint::Min(0),
        ])
        .split(area);

    let now = Local::now();
    let header = Paragraph::new(vec![
        Line::from(Span::styled(
            format!("{}, {}", greeting(now.hour()), user.profile.first_name),
            title_text(p),
        )),
        Line::from(Span::styled(
            format!("{} | {}", user.role.label(), now.format("%A %d %B %Y")),
            label_text(p),
        )),
    ]);
    frame.render_widget(header, chunks[0]);

    let cards = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(25); 4])
        .split(chunks[1]);
    for (idx, (label, value)) in metrics.labels().iter().zip(metrics.values()).enumerate() {
        render_metric_card(frame, cards[idx], p, label, &value);
    }

    let lower = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(60), Constraint::Percentage(40)])
        .split(chunks[2]);

    let activity_items: Vec<ListItem> = activity
        .iter()
        .map(|a| {
            ListItem::new(vec![
                Line::from(a.summary()),
                Line::from(Span::styled(
                    a.timestamp.format("%Y-%m-%d %H:%M").to_string(),
                    label_text(p),
                )),
            ])
        })
        .collect();
    frame.render_widget(
        List::new(activity_items).block(
            Block::default()
                .title("Recent activity")
                .borders(Borders::ALL)
                .border_style(unfocused_border(p)),
        ),
        lower[0],
    );

    let unread = notifications.iter().filter(|n| !n.read).count();
    let notification_items: Vec<ListItem> = notifications
        .iter()
        .map(|n| {
            let marker = if n.read { "  " } else { "● " };
            ListItem::new(vec![
                Line::from(vec![
                    Span::styled(marker, notification_style(p, n.kind)),
                    Span::styled(n.title.clone(), notification_style(p, n.kind)),
                ]),
                Line::from(Span::styled(format!("  {}", n.message), label_text(p))),
            ])
        })
        .collect();
    frame.render_widget(
        List::new(notification_items).block(
            Block::default()
                .title(format!("Notifications ({} unread)", unread))
                .borders(Borders::ALL)
                .border_style(unfocused_border(p)),
        ),
        lower[1],
    );
    Ok(())
}

fn render_interns(app: &App, frame: &mut Frame, area: Rect) -> Result<(), StagiaireError> {
    let p = app.palette();
    let interns = app.workspace.list_interns(InternFilter::default())?;

    let rows = interns.iter().enumerate().map(|(idx, intern)| {
        Row::new(vec![
            Span::raw(intern.name.clone()),
            Span::raw(intern.email.clone()),
            Span::raw(intern.department.clone()),
            Span::raw(intern.start_date.format("%Y-%m-%d").to_string()),
            Span::styled(intern.status.as_str(), intern_status_style(p, intern.status)),
            Span::raw(format!("{}%", intern.progress)),
        ])
        .style(selected_item(p, app.list_selection.is_selected(idx)))
    });

    let table = Table::new(
        rows,
        [
            Constraint::Percentage(20),
            Constraint::Percentage(28),
            Constraint::Percentage(18),
            Constraint::Percentage(12),
            Constraint::Percentage(10),
            Constraint::Percentage(12),
        ],
    )
    .header(header_row(p, &["Name", "Email", "Department", "Start", "Status", "Progress"]))
    .block(section_block(p, format!("Interns ({})", interns.len())));
    frame.render_widget(table, area);
    Ok(())
}

fn render_supervisors(app: &App, frame: &mut Frame, area: Rect) -> Result<(), StagiaireError> {
    let p = app.palette();
    let supervisors = app.workspace.list_supervisors()?;

    let rows = supervisors.iter().enumerate().map(|(idx, view)| {
        Row::new(vec![
            view.user.display_name(),
            view.user.email.clone(),
            view.user.profile.department.clone(),
            view.user.profile.phone.clone(),
            view.intern_count.to_string(),
        ])
        .style(selected_item(p, app.list_selection.is_selected(idx)))
    });

    let table = Table::new(
        rows,
        [
            Constraint::Percentage(22),
            Constraint::Percentage(30),
            Constraint::Percentage(20),
            Constraint::Percentage(18),
            Constraint::Percentage(10),
        ],
    )
    .header(header_row(p, &["Name", "Email", "Department", "Phone", "Interns"]))
    .block(section_block(p, format!("Supervisors ({})", supervisors.len())));
    frame.render_widget(table, area);
    Ok(())
}

fn render_projects(app: &App, frame: &mut Frame, area: Rect) -> Result<(), StagiaireError> {
    let p = app.palette();
    let projects = app.workspace.list_projects()?;
    let names = intern_names(app);

    let rows = projects.iter().enumerate().map(|(idx, project)| {
        let interns = project
            .assigned_interns
            .iter()
            .map(|id| names.get(id).cloned().unwrap_or_else(|| id.clone()))
            .collect::<Vec<_>>()
            .join(", ");
        Row::new(vec![
            Span::raw(project.title.clone()),
            Span::styled(project.status.label(), project_status_style(p, project.status)),
            Span::raw(format!("{}%", project.completion)),
            Span::raw(project.due_date.format("%Y-%m-%d").to_string()),
            Span::raw(interns),
        ])
        .style(selected_item(p, app.list_selection.is_selected(idx)))
    });

    let table = Table::new(
        rows,
        [
            Constraint::Percentage(28),
            Constraint::Percentage(14),
            Constraint::Percentage(10),
            Constraint::Percentage(12),
            Constraint::Percentage(36),
        ],
    )
    .header(header_row(p, &["Title", "Status", "Done", "Due", "Interns"]))
    .block(section_block(p, format!("Projects ({})", projects.len())));
    frame.render_widget(table, area);
    Ok(())
}

fn render_kanban(app: &App, frame: &mut Frame, area: Rect) -> Result<(), StagiaireError> {
    let p = app.palette();
    let projects = app.workspace.list_projects()?;

    let Some(board) = app.kanban.board.as_ref() else {
        frame.render_widget(
            Paragraph::new("No project to show").block(section_block(p, "Kanban".to_string())),
            area,
        );
        return Ok(());
    };

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(3), Constraint::Min(0)])
        .split(area);

    let project = projects.iter().find(|pr| pr.id == board.project_id());
    let header = match project {
        Some(project) => format!(
            "{}  [{}/{}]  {}  {}%  due {}",
            project.title,
            app.kanban.project_index + 1,
            projects.len(),
            project.status.label(),
            project.completion,
            project.due_date.format("%Y-%m-%d")
        ),
        None => board.project_id().to_string(),
    };
    frame.render_widget(
        Paragraph::new(Span::styled(header, title_text(p))).block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(unfocused_border(p)),
        ),
        chunks[0],
    );

    let names = intern_names(app);
    let drag = board.drag();
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(25); 4])
        .split(chunks[1]);

    for (idx, column) in board.columns().into_iter().enumerate() {
        let focused = app.kanban.column == idx;
        let border = if drag.is_active() && drag.over == Some(column.status) {
            drop_target_border(p)
        } else if focused {
            focused_border(p)
        } else {
            unfocused_border(p)
        };

        let items: Vec<ListItem> = column
            .tasks
            .iter()
            .enumerate()
            .map(|(row, task)| {
                let dragged = drag.dragged.as_deref() == Some(task.id.as_str());
                let title_style = if dragged {
                    dragged_item(p)
                } else if task.status == TaskStatus::Done {
                    done_text(p)
                } else {
                    base(p)
                };
                let marker = if dragged { "» " } else { "" };
                let assignee = names
                    .get(&task.assigned_to)
                    .cloned()
                    .unwrap_or_else(|| task.assigned_to.clone());
                let due = task
                    .due_date
                    .map(|d| format!(" due {}", d.format("%d/%m")))
                    .unwrap_or_default();

                ListItem::new(vec![
                    Line::from(vec![
                        Span::styled(marker, dragged_item(p)),
                        Span::styled(format!("[{}] ", task.priority), priority_style(p, task.priority)),
                        Span::styled(task.title.clone(), title_style),
                    ]),
                    Line::from(Span::styled(format!("  {}{}", assignee, due), label_text(p))),
                ])
                .style(selected_item(p, focused && app.kanban.selection.is_selected(row)))
            })
            .collect();

        let list = List::new(items).block(
            Block::default()
                .title(Span::styled(
                    format!("{} ({})", column.title, column.tasks.len()),
                    task_status_style(p, column.status),
                ))
                .borders(Borders::ALL)
                .border_style(border),
        );
        frame.render_widget(list, columns[idx]);
    }

    if let Some(form) = &app.kanban.form {
        render_task_form(app, form, &names, frame);
    }
    Ok(())
}

fn render_task_form(app: &App, form: &TaskForm, names: &HashMap<String, String>, frame: &mut Frame) {
    let p = app.palette();
    let area = centered_box(60, 12, frame.area());
    frame.render_widget(Clear, area);

    let block = Block::default()
        .title(format!(" New task in {} ", form.status.column_title()))
        .borders(Borders::ALL)
        .border_style(focused_border(p))
        .style(base(p));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Min(0),
        ])
        .split(inner);

    let field_border = |field: TaskFormField| {
        if form.focus == field {
            focused_border(p)
        } else {
            unfocused_border(p)
        }
    };
    frame.render_widget(
        Paragraph::new(form.title.display()).block(
            Block::default()
                .title("Title")
                .borders(Borders::ALL)
                .border_style(field_border(TaskFormField::Title)),
        ),
        chunks[0],
    );

    let assignee = form
        .selected_assignee()
        .map(|id| names.get(id).cloned().unwrap_or_else(|| id.to_string()))
        .unwrap_or_default();
    let choices = [
        (TaskFormField::Assignee, "Assignee", assignee, chunks[1]),
        (TaskFormField::Priority, "Priority", form.priority.to_string(), chunks[2]),
    ];
    for (field, label, value, area) in choices {
        let marker = if form.focus == field { "> " } else { "  " };
        frame.render_widget(
            Paragraph::new(Line::from(vec![
                Span::styled(format!("{}{:<10}", marker, label), label_text(p)),
                Span::styled(format!("< {} >", value), field_border(field)),
            ])),
            area,
        );
    }

    if let Some(error) = &form.error {
        frame.render_widget(Paragraph::new(error.as_str()).style(error_text(p)), chunks[3]);
    }
    frame.render_widget(
        Paragraph::new("Enter: create  Tab: next field  Left/Right: change  Esc: cancel")
            .style(label_text(p))
            .wrap(Wrap { trim: true }),
        chunks[4],
    );

    if form.focus == TaskFormField::Title {
        frame.set_cursor_position(Position::new(
            chunks[0].x + 1 + form.title.cursor_column() as u16,
            chunks[0].y + 1,
        ));
    }
}

fn render_reports(app: &App, frame: &mut Frame, area: Rect) -> Result<(), StagiaireError> {
    let p = app.palette();
    let stats = app.workspace.report_stats(Local::now().date_naive())?;

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(7), Constraint::Min(0)])
        .split(area);
    let top = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(40),
            Constraint::Percentage(25),
            Constraint::Percentage(35),
        ])
        .split(chunks[0]);

    let departments = Table::new(
        stats.departments.iter().map(|d| {
            Row::new(vec![
                d.department.clone(),
                d.interns.to_string(),
                d.projects.to_string(),
            ])
        }),
        [
            Constraint::Percentage(50),
            Constraint::Percentage(25),
            Constraint::Percentage(25),
        ],
    )
    .header(header_row(p, &["Department", "Interns", "Projects"]))
    .block(section_block(p, "Departments".to_string()));
    frame.render_widget(departments, top[0]);

    let projects = Paragraph::new(vec![
        Line::from(format!("Pending      {}", stats.projects.todo)),
        Line::from(format!("In progress  {}", stats.projects.in_progress)),
        Line::from(format!("Completed    {}", stats.projects.done)),
    ])
    .block(section_block(p, "Projects".to_string()));
    frame.render_widget(projects, top[1]);

    let priorities = stats
        .tasks
        .by_priority
        .iter()
        .map(|(priority, count)| format!("{} {}", priority, count))
        .collect::<Vec<_>>()
        .join("  ");
    let tasks = Paragraph::new(vec![
        Line::from(format!(
            "Total {}  Completed {}  Pending {}",
            stats.tasks.total, stats.tasks.completed, stats.tasks.pending
        )),
        Line::from(vec![
            Span::styled(format!("Overdue {}", stats.tasks.overdue), error_text(p)),
            Span::raw(format!("  Bugs {}", stats.tasks.bugs)),
        ]),
        Line::from(Span::styled(priorities, label_text(p))),
    ])
    .block(section_block(p, "Tasks".to_string()));
    frame.render_widget(tasks, top[2]);

    let interns = Table::new(
        stats.interns.iter().map(|s| {
            Row::new(vec![
                s.name.clone(),
                s.department.clone(),
                format!("{}%", s.progress),
                format!("{}/{}", s.completed_tasks, s.assigned_tasks),
                s.projects.to_string(),
            ])
        }),
        [
            Constraint::Percentage(28),
            Constraint::Percentage(22),
            Constraint::Percentage(15),
            Constraint::Percentage(20),
            Constraint::Percentage(15),
        ],
    )
    .header(header_row(p, &["Intern", "Department", "Progress", "Tasks done", "Projects"]))
    .block(section_block(p, "Interns".to_string()));
    frame.render_widget(interns, chunks[1]);
    Ok(())
}

fn render_settings(app: &App, frame: &mut Frame, area: Rect) -> Result<(), StagiaireError> {
    let p = app.palette();
    let user = app.workspace.current_user()?;
    let avatar = if app.storage.profile_image().is_some() {
        "custom image".to_string()
    } else {
        user.profile.avatar_url.clone()
    };

    let field = |label: &str, value: String| {
        Line::from(vec![
            Span::styled(format!("{:<12}", label), label_text(p)),
            Span::raw(value),
        ])
    };
    let lines = vec![
        Line::from(Span::styled("Profile", title_text(p))),
        field("Name", user.display_name()),
        field("Email", user.email.clone()),
        field("Role", user.role.label().to_string()),
        field("Department", user.profile.department.clone()),
        field("Phone", user.profile.phone.clone()),
        field("Avatar", avatar),
        Line::from(""),
        Line::from(Span::styled("Appearance", title_text(p))),
        field("Theme", format!("{} (t to toggle)", app.theme)),
        Line::from(""),
        Line::from(Span::styled("Storage", title_text(p))),
        field("File", app.storage.path().display().to_string()),
    ];
    frame.render_widget(
        Paragraph::new(lines)
            .wrap(Wrap { trim: false })
            .block(section_block(p, "Settings".to_string())),
        area,
    );
    Ok(())
}

fn render_footer(app: &App, frame: &mut Frame, area: Rect) {
    let p = app.palette();
    let help = match app.active_section() {
        Some(Section::Kanban) if app.kanban.form.is_some() => "type a title | Tab: field | enter: create | esc: cancel",
        Some(Section::Kanban) if app.kanban.is_dragging() => {
            "h/l: choose column | space/enter: drop | esc: cancel"
        }
        Some(Section::Kanban) => {
            "h/l: column | j/k: task | space: pick up | n: new task | [/]: project | Tab: section | t: theme | L: sign out | q: quit"
        }
        Some(Section::Dashboard) => "r: mark notifications read | Tab/1-7: section | t: theme | L: sign out | q: quit",
        _ => "j/k: navigate | Tab/1-7: section | t: theme | L: sign out | q: quit",
    };

    let line = match &app.status_message {
        Some(message) => Line::from(vec![
            Span::styled(message.clone(), active_item(p)),
            Span::styled(format!("  {}", help), label_text(p)),
        ]),
        None => Line::from(Span::styled(help, label_text(p))),
    };
    frame.render_widget(
        Paragraph::new(line).block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(unfocused_border(p)),
        ),
        area,
    );
}

fn render_error(app: &App, frame: &mut Frame, area: Rect, err: &StagiaireError) {
    let p = app.palette();
    frame.render_widget(
        Paragraph::new(err.to_string())
            .style(error_text(p))
            .block(section_block(p, "Error".to_string())),
        area,
    );
}

fn header_row<'a>(p: &Palette, titles: &[&'a str]) -> Row<'a> {
    Row::new(titles.to_vec()).style(title_text(p)).bottom_margin(1)
}

fn section_block<'a>(p: &Palette, title: String) -> Block<'a> {
    Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_style(focused_border(p))
}

/// Intern id to display name, over the interns the user may see. Interns
/// cannot open the interns section and only get their own name.
fn intern_names(app: &App) -> HashMap<String, String> {
    match app.workspace.list_interns(InternFilter::default()) {
        Ok(interns) => interns.into_iter().map(|i| (i.id, i.name)).collect(),
        Err(_) => app
            .workspace
            .current_user()
            .map(|user| HashMap::from([(user.id.clone(), user.display_name())]))
            .unwrap_or_default(),
    }
}
