//! Minimal server-side HTML rendering.
//!
//! Pages are simple semantic markup around the view models; all dynamic
//! text passes through [`escape`]. Layout classes mirror the Tailwind
//! vocabulary carried by the notice and button view models.

use std::fmt::Write as _;

use crate::domain::application::ReviewActions;
use crate::domain::job::rules::{ActionButton, JobDetailActions};
use crate::domain::notice::{ErrorNotice, SuccessNotice};
use crate::domain::options::{BANDS, CAPABILITIES, STATUSES};
use crate::domain::job::{Job, JobStatus};

use super::views::{
    ApplicationView, FilterOptions, HeaderState, JobCard, Pagination,
};

/// Escape text for interpolation into HTML content or attribute values.
pub fn escape(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

fn nav(header: &HeaderState) -> String {
    let mut html = String::from(r#"<header class="navbar bg-base-100 shadow"><nav><ul class="menu menu-horizontal">"#);
    for item in &header.navigation {
        let _ = write!(
            html,
            r#"<li><a href="{}">{}</a></li>"#,
            escape(item.href),
            escape(item.text)
        );
    }
    html.push_str("</ul></nav><div>");
    if let Some(user) = &header.user {
        let _ = write!(html, r#"<span>{}</span>"#, escape(&user.display_name));
        if user.has_admin_badge {
            let _ = write!(
                html,
                r#"<span class="{}">{}</span>"#,
                user.admin_badge_class, user.admin_badge_text
            );
        }
    }
    if header.show_login_button {
        html.push_str(r#"<a class="btn btn-sm" href="/login">Login</a>"#);
    }
    if header.show_logout_button {
        html.push_str(
            r#"<form method="post" action="/logout"><button class="btn btn-sm" type="submit">Logout</button></form>"#,
        );
    }
    html.push_str("</div></header>");
    html
}

fn page(title: &str, header: &HeaderState, main: &str) -> String {
    format!(
        concat!(
            "<!doctype html><html lang=\"en\"><head><meta charset=\"utf-8\">",
            "<meta name=\"viewport\" content=\"width=device-width, initial-scale=1\">",
            "<title>{title}</title><link rel=\"stylesheet\" href=\"/styles.css\"></head>",
            "<body>{nav}<main class=\"container mx-auto px-4 py-8\">{main}</main></body></html>"
        ),
        title = escape(title),
        nav = nav(header),
        main = main,
    )
}

fn banners(error: &ErrorNotice, success: &SuccessNotice) -> String {
    let mut html = String::new();
    if error.show {
        let _ = write!(
            html,
            r#"<div class="{container}" role="alert"><i data-lucide="{icon}"></i><span class="{text}">{message}</span></div>"#,
            container = error.container_class,
            icon = error.icon_class,
            text = error.text_class,
            message = escape(error.message),
        );
    }
    if success.show {
        let _ = write!(
            html,
            r#"<div class="{container}" role="status"><i data-lucide="{icon}"></i><span class="{text}">{message}</span></div>"#,
            container = success.container_class,
            icon = success.icon_class,
            text = success.text_class,
            message = escape(success.message),
        );
    }
    html
}

fn button(action: &ActionButton) -> String {
    if !action.show {
        return String::new();
    }
    if action.disabled {
        format!(
            r#"<span class="{}" aria-disabled="true">{}</span>"#,
            action.class,
            escape(action.text)
        )
    } else {
        format!(
            r#"<a class="{}" href="{}">{}</a>"#,
            action.class,
            escape(&action.href),
            escape(action.text)
        )
    }
}

fn job_card_html(card: &JobCard) -> String {
    format!(
        concat!(
            r#"<article class="card bg-base-100 shadow"><h2><a href="/jobs/{id}">{name}</a></h2>"#,
            r#"<p>{location} &middot; {capability} &middot; {band}</p>"#,
            r#"<p>{summary}</p>"#,
            r#"<p><span class="{badge}">{status}</span> {positions} &middot; Closes {closing}</p>"#,
            "{button}</article>"
        ),
        id = card.id,
        name = escape(&card.name),
        location = escape(&card.location),
        capability = escape(&card.capability),
        band = escape(&card.band),
        summary = escape(&card.summary),
        badge = card.status.badge_class,
        status = card.status.text,
        positions = escape(&card.positions_text),
        closing = escape(&card.closing_date),
        button = button(&card.button),
    )
}

/// Standalone error page; no session-dependent header.
pub fn error_page(status: u16, message: &str) -> String {
    format!(
        concat!(
            "<!doctype html><html lang=\"en\"><head><meta charset=\"utf-8\">",
            "<title>Error {status}</title></head><body>",
            "<main class=\"container mx-auto px-4 py-8\"><h1>Error {status}</h1>",
            "<p>{message}</p><a href=\"/\">Back to home</a></main></body></html>"
        ),
        status = status,
        message = escape(message),
    )
}

/// Landing page with the three most recent roles.
pub fn home_page(header: &HeaderState, success: &SuccessNotice, latest: &[JobCard]) -> String {
    let mut main = banners(&ErrorNotice::from_code(None), success);
    main.push_str("<h1>Find Your Next Career Opportunity</h1><section>");
    for card in latest {
        main.push_str(&job_card_html(card));
    }
    main.push_str(r#"</section><a class="btn" href="/jobs">Browse all jobs</a>"#);
    page("Kainos Job Portal", header, &main)
}

/// Everything the jobs listing page renders.
pub struct JobsPage<'a> {
    pub header: &'a HeaderState,
    pub error: &'a ErrorNotice,
    pub success: &'a SuccessNotice,
    pub is_admin: bool,
    pub search: &'a str,
    pub selected_location: Option<&'a str>,
    pub selected_capability: Option<&'a str>,
    pub selected_band: Option<&'a str>,
    pub options: &'a FilterOptions,
    pub cards: &'a [JobCard],
    pub pagination: Pagination,
}

fn select(name: &str, label: &str, options: &[String], selected: Option<&str>) -> String {
    let mut html = format!(
        r#"<select class="select select-bordered" name="{name}" aria-label="{label}"><option value="">All</option>"#,
        name = name,
        label = escape(label),
    );
    for option in options {
        let marker = if selected == Some(option.as_str()) {
            " selected"
        } else {
            ""
        };
        let _ = write!(
            html,
            r#"<option value="{value}"{marker}>{value}</option>"#,
            value = escape(option),
            marker = marker,
        );
    }
    html.push_str("</select>");
    html
}

/// Paged jobs listing with search and filters.
pub fn jobs_page(view: &JobsPage<'_>) -> String {
    let mut main = banners(view.error, view.success);
    main.push_str("<h1>Available Job Roles</h1>");
    if view.is_admin {
        main.push_str(r#"<a class="btn bg-purple-600 text-white" href="/jobs/create">Create Job</a>"#);
    }
    let _ = write!(
        main,
        concat!(
            r#"<form method="get" action="/jobs">"#,
            r#"<input class="input input-bordered" type="search" name="search" value="{search}" placeholder="Search roles">"#,
            "{location}{capability}{band}",
            r#"<button class="btn" type="submit">Filter</button></form>"#
        ),
        search = escape(view.search),
        location = select("location", "Location", &view.options.locations, view.selected_location),
        capability = select(
            "capability",
            "Capability",
            &view.options.capabilities,
            view.selected_capability
        ),
        band = select("band", "Band", &view.options.bands, view.selected_band),
    );
    main.push_str("<section>");
    if view.cards.is_empty() {
        main.push_str("<p>No jobs match your search.</p>");
    }
    for card in view.cards {
        main.push_str(&job_card_html(card));
    }
    main.push_str("</section>");
    let pagination = view.pagination;
    let _ = write!(
        main,
        r#"<nav aria-label="pagination"><span>Page {current} of {total_pages} ({total} roles)</span>"#,
        current = pagination.current_page,
        total_pages = pagination.total_pages,
        total = pagination.total,
    );
    if pagination.has_previous {
        let _ = write!(
            main,
            r#"<a href="/jobs?page={}">Previous</a>"#,
            pagination.current_page - 1
        );
    }
    if pagination.has_next {
        let _ = write!(
            main,
            r#"<a href="/jobs?page={}">Next</a>"#,
            pagination.current_page + 1
        );
    }
    main.push_str("</nav>");
    page("Available Job Roles", view.header, &main)
}

/// Job detail page: metadata plus the resolved header and sidebar actions.
pub fn job_detail_page(
    header: &HeaderState,
    error: &ErrorNotice,
    success: &SuccessNotice,
    card: &JobCard,
    key_responsibilities: &str,
    actions: &JobDetailActions,
) -> String {
    let mut main = banners(error, success);
    let _ = write!(
        main,
        concat!(
            "<h1>{name}</h1>{header_button}",
            r#"<p><span class="{badge}"><i data-lucide="{icon}"></i> <span class="{color}">{status}</span></span></p>"#,
            "<p>{location} &middot; {capability} &middot; {band}</p>",
            "<p>{positions} &middot; Closes {closing}</p>",
            "<section><h2>Summary</h2><p>{summary}</p></section>",
            "<section><h2>Key Responsibilities</h2><p>{responsibilities}</p></section>"
        ),
        name = escape(&card.name),
        header_button = button(&actions.header),
        badge = card.status.badge_class,
        icon = card.status.icon_class,
        color = card.status.color,
        status = card.status.text,
        location = escape(&card.location),
        capability = escape(&card.capability),
        band = escape(&card.band),
        positions = escape(&card.positions_text),
        closing = escape(&card.closing_date),
        summary = escape(&card.summary),
        responsibilities = escape(key_responsibilities),
    );
    main.push_str("<aside>");
    if actions.show_apply_section {
        main.push_str("<h2>Interested?</h2>");
        main.push_str(&button(&actions.apply));
    }
    if actions.show_manage_section {
        let _ = write!(
            main,
            concat!(
                "<h2>Manage</h2>",
                r#"<a class="btn" href="/jobs/{id}/edit">Edit</a>"#,
                r#"<form method="post" action="/jobs/{id}/delete">"#,
                r#"<button class="btn bg-red-600 text-white" type="submit">Delete</button></form>"#
            ),
            id = card.id,
        );
    }
    main.push_str("</aside>");
    page(&card.name, header, &main)
}

fn form_field(label: &str, name: &str, value: &str, kind: &str) -> String {
    format!(
        concat!(
            r#"<label>{label}<input class="input input-bordered w-full" "#,
            r#"type="{kind}" name="{name}" value="{value}" required></label>"#
        ),
        label = escape(label),
        kind = kind,
        name = name,
        value = escape(value),
    )
}

/// Create or edit form. `job` is `None` for create.
pub fn job_form_page(header: &HeaderState, error: &ErrorNotice, job: Option<&Job>) -> String {
    let (title, action) = match job {
        Some(job) => (format!("Edit {}", job.name), format!("/jobs/{}/edit", job.id)),
        None => ("Create New Job Role".to_owned(), "/jobs/create".to_owned()),
    };
    let mut main = banners(error, &SuccessNotice::from_code(None));
    let _ = write!(main, "<h1>{}</h1>", escape(&title));
    let _ = write!(main, r#"<form method="post" action="{action}">"#);
    let field = |name: &str| -> String {
        job.map(|job| match name {
            "name" => job.name.clone(),
            "location" => job.location.clone(),
            "summary" => job.summary.clone(),
            "closingDate" => job.closing_date.format("%Y-%m-%d").to_string(),
            "numberOfOpenPositions" => job.open_positions.to_string(),
            _ => String::new(),
        })
        .unwrap_or_default()
    };
    main.push_str(&form_field("Name", "name", &field("name"), "text"));
    main.push_str(&form_field("Location", "location", &field("location"), "text"));
    let selected_capability = job.map(|job| job.capability.clone());
    let capabilities: Vec<String> = CAPABILITIES.iter().map(|c| (*c).to_owned()).collect();
    main.push_str(&select(
        "capability",
        "Capability",
        &capabilities,
        selected_capability.as_deref(),
    ));
    let selected_band = job.map(|job| job.band.clone());
    let bands: Vec<String> = BANDS.iter().map(|b| (*b).to_owned()).collect();
    main.push_str(&select("band", "Band", &bands, selected_band.as_deref()));
    main.push_str(&form_field(
        "Closing date",
        "closingDate",
        &field("closingDate"),
        "date",
    ));
    main.push_str(&form_field(
        "Number of open positions",
        "numberOfOpenPositions",
        &field("numberOfOpenPositions"),
        "number",
    ));
    let _ = write!(
        main,
        concat!(
            r#"<label>Summary<textarea class="textarea textarea-bordered w-full" "#,
            r#"name="summary" required>{summary}</textarea></label>"#,
            r#"<label>Key responsibilities<textarea class="textarea textarea-bordered w-full" "#,
            r#"name="keyResponsibilities" required>{responsibilities}</textarea></label>"#
        ),
        summary = escape(&field("summary")),
        responsibilities = escape(&job.map(|job| job.key_responsibilities.clone()).unwrap_or_default()),
    );
    main.push_str(r#"<select class="select select-bordered" name="status">"#);
    for (status, label) in STATUSES {
        let marker = if job.map(|job| job.status) == Some(*status)
            || (job.is_none() && *status == JobStatus::Open)
        {
            " selected"
        } else {
            ""
        };
        let _ = write!(
            main,
            r#"<option value="{value}"{marker}>{label}</option>"#,
            value = status.as_str(),
            marker = marker,
            label = label,
        );
    }
    main.push_str("</select>");
    main.push_str(r#"<button class="btn bg-blue-600 text-white" type="submit">Save</button></form>"#);
    page(&title, header, &main)
}

/// Apply form for an open job.
pub fn apply_page(header: &HeaderState, error: &ErrorNotice, card: &JobCard) -> String {
    let mut main = banners(error, &SuccessNotice::from_code(None));
    let _ = write!(
        main,
        concat!(
            "<h1>Apply for {name}</h1>",
            "<p>{location} &middot; Closes {closing}</p>",
            r#"<form method="post" action="/jobs/{id}/apply">"#
        ),
        name = escape(&card.name),
        location = escape(&card.location),
        closing = escape(&card.closing_date),
        id = card.id,
    );
    main.push_str(&form_field("Full name", "applicantName", "", "text"));
    main.push_str(&form_field("Email", "email", "", "email"));
    // Phone is the one optional field on this form.
    main.push_str(
        r#"<label>Phone number<input class="input input-bordered w-full" type="tel" name="phoneNumber" value=""></label>"#,
    );
    main.push_str(concat!(
        r#"<label>Cover letter<textarea class="textarea textarea-bordered w-full" "#,
        r#"name="coverLetter" minlength="50" required></textarea></label>"#,
        r#"<button class="btn bg-blue-600 text-white" type="submit">Submit Application</button></form>"#
    ));
    page(&format!("Apply for {}", card.name), header, &main)
}

/// Confirmation page shown after a successful submission.
pub fn apply_success_page(header: &HeaderState, card: &JobCard) -> String {
    let main = format!(
        concat!(
            r#"<div class="bg-green-50 border border-green-200 text-green-700 px-4 py-3 rounded mb-6" role="status">"#,
            "<h1>Application Submitted</h1>",
            "<p>Thank you for applying for {name}. We will be in touch.</p></div>",
            r#"<a class="btn" href="/jobs">Back to jobs</a>"#
        ),
        name = escape(&card.name),
    );
    page("Application Submitted", header, &main)
}

fn application_row_html(view: &ApplicationView, title: &str) -> String {
    format!(
        concat!(
            r#"<tr><td><a href="{href}">{title}</a></td>"#,
            r#"<td>{email}</td><td>{submitted}</td>"#,
            r#"<td><span class="{badge}">{status}</span></td></tr>"#
        ),
        href = escape(&view.detail_href),
        title = escape(title),
        email = escape(&view.email),
        submitted = escape(&view.submitted_on),
        badge = view.status.badge_class,
        status = view.status.text,
    )
}

/// A member's own applications.
pub fn my_applications_page(
    header: &HeaderState,
    success: &SuccessNotice,
    rows: &[(ApplicationView, String)],
) -> String {
    let mut main = banners(&ErrorNotice::from_code(None), success);
    main.push_str("<h1>My Applications</h1>");
    if rows.is_empty() {
        main.push_str(r#"<p>You have not applied for any roles yet.</p><a class="btn" href="/jobs">Browse jobs</a>"#);
    } else {
        main.push_str("<table class=\"table\"><thead><tr><th>Role</th><th>Email</th><th>Submitted</th><th>Status</th></tr></thead><tbody>");
        for (view, job_name) in rows {
            main.push_str(&application_row_html(view, job_name));
        }
        main.push_str("</tbody></table>");
    }
    page("My Applications", header, &main)
}

/// One of the member's own applications, with the job context.
pub fn my_application_detail_page(
    header: &HeaderState,
    view: &ApplicationView,
    job_name: &str,
) -> String {
    let mut main = format!(
        concat!(
            "<h1>Application for {job}</h1>",
            r#"<p><span class="{badge}">{status}</span> Submitted {submitted}</p>"#,
            "<p>{name} &middot; {email}</p>"
        ),
        job = escape(job_name),
        badge = view.status.badge_class,
        status = view.status.text,
        submitted = escape(&view.submitted_on),
        name = escape(&view.applicant_name),
        email = escape(&view.email),
    );
    if let Some(cover_letter) = &view.cover_letter {
        let _ = write!(
            main,
            "<section><h2>Cover Letter</h2><p>{}</p></section>",
            escape(cover_letter)
        );
    }
    if let (Some(url), Some(file_name)) = (&view.cv_url, &view.cv_file_name) {
        let _ = write!(
            main,
            r#"<p><a href="{}">{}</a></p>"#,
            escape(url),
            escape(file_name)
        );
    }
    page("My Application", header, &main)
}

/// Admin list of applications for one job.
pub fn applications_page(
    header: &HeaderState,
    error: &ErrorNotice,
    job_name: &str,
    rows: &[ApplicationView],
) -> String {
    let mut main = banners(error, &SuccessNotice::from_code(None));
    let _ = write!(main, "<h1>Applications for {}</h1>", escape(job_name));
    if rows.is_empty() {
        main.push_str("<p>No applications yet.</p>");
    } else {
        main.push_str("<table class=\"table\"><thead><tr><th>Applicant</th><th>Email</th><th>Submitted</th><th>Status</th></tr></thead><tbody>");
        for view in rows {
            main.push_str(&application_row_html(view, &view.applicant_name));
        }
        main.push_str("</tbody></table>");
    }
    page(&format!("Applications for {job_name}"), header, &main)
}

/// Admin review page for one application.
pub fn application_detail_page(
    header: &HeaderState,
    success: &SuccessNotice,
    view: &ApplicationView,
    job_name: &str,
    review: ReviewActions,
) -> String {
    let mut main = banners(&ErrorNotice::from_code(None), success);
    let _ = write!(
        main,
        concat!(
            "<h1>Application from {name}</h1>",
            "<p>For {job}</p>",
            r#"<p><span class="{badge}">{status}</span> Submitted {submitted}</p>"#,
            "<p>{email}{phone}</p>"
        ),
        name = escape(&view.applicant_name),
        job = escape(job_name),
        badge = view.status.badge_class,
        status = view.status.text,
        submitted = escape(&view.submitted_on),
        email = escape(&view.email),
        phone = view
            .phone_number
            .as_deref()
            .map(|phone| format!(" &middot; {}", escape(phone)))
            .unwrap_or_default(),
    );
    if let Some(cover_letter) = &view.cover_letter {
        let _ = write!(
            main,
            "<section><h2>Cover Letter</h2><p>{}</p></section>",
            escape(cover_letter)
        );
    }
    if let (Some(url), Some(file_name)) = (&view.cv_url, &view.cv_file_name) {
        let _ = write!(
            main,
            r#"<p><a href="{}">{}</a></p>"#,
            escape(url),
            escape(file_name)
        );
    }
    if review.can_review {
        let _ = write!(
            main,
            concat!(
                r#"<form method="post" action="/jobs/{job_id}/applications/{id}/accept">"#,
                r#"<textarea class="textarea textarea-bordered w-full" name="notes" placeholder="Notes"></textarea>"#,
                r#"<button class="btn bg-green-600 text-white" type="submit">Accept</button></form>"#,
                r#"<form method="post" action="/jobs/{job_id}/applications/{id}/reject">"#,
                r#"<textarea class="textarea textarea-bordered w-full" name="notes" placeholder="Notes"></textarea>"#,
                r#"<button class="btn bg-red-600 text-white" type="submit">Reject</button></form>"#
            ),
            job_id = view.job_id,
            id = view.id,
        );
    }
    if review.show_details {
        if let Some(notes) = &view.notes {
            let _ = write!(
                main,
                "<section><h2>Reviewer Notes</h2><p>{}</p></section>",
                escape(notes)
            );
        }
    }
    page(
        &format!("Application from {}", view.applicant_name),
        header,
        &main,
    )
}

/// Login form. A known target survives as a hidden field.
pub fn login_page(
    header: &HeaderState,
    error: &ErrorNotice,
    success: &SuccessNotice,
    redirect_to: Option<&str>,
) -> String {
    let mut main = banners(error, success);
    main.push_str(r#"<h1>Login</h1><form method="post" action="/login">"#);
    main.push_str(&form_field("Email", "email", "", "email"));
    main.push_str(
        r#"<label>Password<input class="input input-bordered w-full" type="password" name="password" required></label>"#,
    );
    if let Some(target) = redirect_to {
        let _ = write!(
            main,
            r#"<input type="hidden" name="redirectTo" value="{}">"#,
            escape(target)
        );
    }
    main.push_str(concat!(
        r#"<button class="btn bg-blue-600 text-white" type="submit">Login</button></form>"#,
        r#"<p>New here? <a href="/register">Create an account</a></p>"#
    ));
    page("Login - Kainos Job Portal", header, &main)
}

/// Registration form.
pub fn register_page(header: &HeaderState, error: &ErrorNotice) -> String {
    let mut main = banners(error, &SuccessNotice::from_code(None));
    main.push_str(r#"<h1>Create an Account</h1><form method="post" action="/register">"#);
    main.push_str(&form_field("Display name", "displayName", "", "text"));
    main.push_str(&form_field("Email", "email", "", "email"));
    main.push_str(concat!(
        r#"<label>Password<input class="input input-bordered w-full" type="password" name="password" required></label>"#,
        r#"<label>Confirm password<input class="input input-bordered w-full" type="password" name="confirmPassword" required></label>"#,
        r#"<button class="btn bg-blue-600 text-white" type="submit">Register</button></form>"#
    ));
    page("Register - Kainos Job Portal", header, &main)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::application::{status_display, ApplicationStatus};
    use crate::domain::job::tests::open_job;
    use crate::domain::user::Viewer;
    use crate::inbound::http::views::{header_state, job_card};

    #[test]
    fn escapes_html_metacharacters() {
        assert_eq!(
            escape(r#"<b>"a" & 'b'</b>"#),
            "&lt;b&gt;&quot;a&quot; &amp; &#39;b&#39;&lt;/b&gt;"
        );
    }

    #[test]
    fn dynamic_content_is_escaped_in_cards() {
        let mut job = open_job(1, 1);
        job.name = "<script>alert(1)</script>".to_owned();
        let card = job_card(&job, &Viewer::Anonymous);
        let html = job_card_html(&card);
        assert!(!html.contains("<script>"));
        assert!(html.contains("&lt;script&gt;"));
    }

    #[test]
    fn disabled_buttons_render_without_links() {
        let job = crate::domain::job::tests::closed_job(4);
        let card = job_card(&job, &Viewer::Anonymous);
        let html = job_card_html(&card);
        assert!(html.contains("aria-disabled=\"true\""));
        assert!(html.contains("Closed"));
    }

    #[test]
    fn error_pages_carry_the_status_and_message() {
        let html = error_page(404, "no such job");
        assert!(html.contains("Error 404"));
        assert!(html.contains("no such job"));
    }

    #[test]
    fn review_forms_appear_only_when_reviewable() {
        let header = header_state(&Viewer::Anonymous);
        let application = crate::domain::application::tests::pending_application(9, 5, 7);
        let view = crate::inbound::http::views::admin_application_view(&application);
        let html = application_detail_page(
            &header,
            &SuccessNotice::from_code(None),
            &view,
            "Software Engineer",
            ReviewActions {
                can_review: true,
                show_details: false,
            },
        );
        assert!(html.contains("/jobs/5/applications/9/accept"));
        assert!(html.contains("/jobs/5/applications/9/reject"));

        let html = application_detail_page(
            &header,
            &SuccessNotice::from_code(None),
            &view,
            "Software Engineer",
            ReviewActions {
                can_review: false,
                show_details: true,
            },
        );
        assert!(!html.contains("/accept"));
    }

    #[test]
    fn status_badges_use_the_domain_styling() {
        let display = status_display(&ApplicationStatus::Accepted);
        assert!(display.badge_class.contains("bg-green-100"));
    }
}
