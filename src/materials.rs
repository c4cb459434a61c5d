// File: ./src/materials.rs
// Static site content: pages, the course list and weekly exercise material.
use strum::{Display, EnumIter, IntoEnumIterator};

pub const SITE_TITLE: &str = "Übungsstunde ETH Zürich";
pub const WELCOME_TEXT: &str = "Willkommen auf meiner persönlichen Seite. Hier findest du alle Materialien für die Übungsstunden von mir.";
pub const CONTACT_TEXT: &str = "Ihr könnt mich immer bei Fragen gerne kontaktieren unter:";
pub const CONTACT_EMAIL: &str = "obaumgartner@ethz.ch";

pub const NOT_FOUND_TITLE: &str = "404 site not found";
pub const NOT_FOUND_BACK: &str = "Zurück zur Startseite";

pub const SHEET_LABEL: &str = "Übungsblatt";
pub const SOLUTION_LABEL: &str = "Lösungen";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter, Display)]
pub enum Lesson {
    #[strum(to_string = "NuS I HS24")]
    Nus1Hs24,
    #[strum(to_string = "NuS II FS25")]
    Nus2Fs25,
}

impl Lesson {
    pub fn route(self) -> &'static str {
        match self {
            Lesson::Nus1Hs24 => "/nus1-hs24",
            Lesson::Nus2Fs25 => "/nus2-fs25",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Page {
    Home,
    Lesson(Lesson),
    Calendar,
    Phasors,
    Leaderboard,
    NotFound,
}

impl Page {
    /// Pages reachable from the navigation bar, in tab order.
    pub fn navigable() -> Vec<Page> {
        let mut pages = vec![Page::Home];
        pages.extend(Lesson::iter().map(Page::Lesson));
        pages.extend([Page::Calendar, Page::Phasors, Page::Leaderboard]);
        pages
    }

    /// Resolves a site path. Trailing slashes are ignored; anything unknown
    /// is the 404 page.
    pub fn from_route(path: &str) -> Page {
        let trimmed = path.trim();
        let normalized = match trimmed.trim_end_matches('/') {
            "" => "/",
            p => p,
        };
        match normalized {
            "/" => Page::Home,
            "/calendar" => Page::Calendar,
            "/zeiger" => Page::Phasors,
            "/leaderboard" => Page::Leaderboard,
            other => Lesson::iter()
                .find(|l| l.route() == other)
                .map(Page::Lesson)
                .unwrap_or(Page::NotFound),
        }
    }

    pub fn route(self) -> &'static str {
        match self {
            Page::Home => "/",
            Page::Lesson(l) => l.route(),
            Page::Calendar => "/calendar",
            Page::Phasors => "/zeiger",
            Page::Leaderboard => "/leaderboard",
            Page::NotFound => "/404",
        }
    }

    pub fn title(self) -> String {
        match self {
            Page::Home => "Home".to_string(),
            Page::Lesson(l) => l.to_string(),
            Page::Calendar => "Calendar".to_string(),
            Page::Phasors => "Phasors".to_string(),
            Page::Leaderboard => "Leaderboard".to_string(),
            Page::NotFound => "404".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Link {
    pub label: String,
    pub href: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WeekMaterial {
    pub week: String,
    /// Paths relative to the deployment prefix.
    pub sheet: String,
    pub solution: Option<String>,
    /// A page linked from this week, e.g. the phasor simulation.
    pub extra: Option<(String, Page)>,
}

impl WeekMaterial {
    pub fn links(&self, path_prefix: &str) -> Vec<Link> {
        let mut links = vec![Link {
            label: SHEET_LABEL.to_string(),
            href: resolve(path_prefix, &self.sheet),
        }];
        if let Some(solution) = &self.solution {
            links.push(Link {
                label: SOLUTION_LABEL.to_string(),
                href: resolve(path_prefix, solution),
            });
        }
        links
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LessonInfo {
    pub lesson: Lesson,
    pub location: Option<String>,
    pub time: Option<String>,
    pub share_link: Option<Link>,
    pub weeks: Vec<WeekMaterial>,
}

pub fn lesson_info(lesson: Lesson) -> LessonInfo {
    match lesson {
        Lesson::Nus1Hs24 => LessonInfo {
            lesson,
            location: None,
            time: None,
            share_link: None,
            weeks: Vec::new(),
        },
        Lesson::Nus2Fs25 => LessonInfo {
            lesson,
            location: Some("Ort: HG D5.1".to_string()),
            time: Some("Zeit: Freitag 10:15-12:00".to_string()),
            share_link: Some(Link {
                label: "Polybox".to_string(),
                href: "https://polybox.ethz.ch/index.php/s/cpO2Ul9JOkaln0G".to_string(),
            }),
            weeks: vec![
                week(1, "NuS2_FS25", None),
                week(2, "NuS2_FS25", Some(("Zeigersimulation", Page::Phasors))),
            ],
        },
    }
}

fn week(n: u32, folder: &str, extra: Option<(&str, Page)>) -> WeekMaterial {
    WeekMaterial {
        week: format!("Week {}", n),
        sheet: format!("{}/Übung{:02}_Leer.pdf", folder, n),
        solution: Some(format!("{}/Übung{:02}_Lsg.pdf", folder, n)),
        extra: extra.map(|(label, page)| (label.to_string(), page)),
    }
}

/// Joins a relative material path onto the deployment prefix.
/// Absolute URLs pass through unchanged.
pub fn resolve(path_prefix: &str, relative: &str) -> String {
    if relative.contains("://") {
        return relative.to_string();
    }
    let prefix = path_prefix.trim_end_matches('/');
    let rel = relative.trim_start_matches('/');
    format!("{}/{}", prefix, rel)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_routes_are_not_found() {
        assert_eq!(Page::from_route("/"), Page::Home);
        assert_eq!(Page::from_route("/zeiger/"), Page::Phasors);
        assert_eq!(Page::from_route("/nus2-fs25"), Page::Lesson(Lesson::Nus2Fs25));
        assert_eq!(Page::from_route("/nope"), Page::NotFound);
    }

    #[test]
    fn material_links_use_prefix() {
        let info = lesson_info(Lesson::Nus2Fs25);
        let links = info.weeks[0].links("/~obaumgartner");
        assert_eq!(links[0].label, "Übungsblatt");
        assert_eq!(links[0].href, "/~obaumgartner/NuS2_FS25/Übung01_Leer.pdf");
        assert_eq!(links[1].href, "/~obaumgartner/NuS2_FS25/Übung01_Lsg.pdf");
    }
}
