//! Project catalog and the detail modal.

use serde::{Deserialize, Serialize};
use vitrine_ui::Key;

/// One portfolio project.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Project {
    /// Card and modal title.
    pub title: String,
    /// The problem.
    pub challenge: String,
    /// What was built.
    pub solution: String,
    /// Measured outcome.
    pub impact: String,
    /// Technology tags.
    pub tags: Vec<String>,
    /// Headline numbers, `"<value> <label>"`.
    pub metrics: Vec<String>,
    /// Source repository link.
    pub repo: String,
    /// Live demo link.
    pub demo: String,
}

impl Default for Project {
    fn default() -> Self {
        Self {
            title: String::new(),
            challenge: String::new(),
            solution: String::new(),
            impact: String::new(),
            tags: Vec::new(),
            metrics: Vec::new(),
            repo: "#".to_string(),
            demo: "#".to_string(),
        }
    }
}

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| (*s).to_string()).collect()
}

impl Project {
    /// The stock catalog.
    #[must_use]
    pub fn defaults() -> Vec<Self> {
        vec![
            Self {
                title: "Customer Segmentation (RFM)".to_string(),
                challenge: "An e-commerce company could not personalize marketing campaigns \
                            because customers were not segmented."
                    .to_string(),
                solution: "RFM analysis (recency, frequency, monetary value) with K-Means \
                           clustering to group customers into buying profiles."
                    .to_string(),
                impact: "Campaign conversion up 23% and customer acquisition cost down 15%."
                    .to_string(),
                tags: strings(&["Python", "SQL", "Pandas", "Scikit-learn"]),
                metrics: strings(&["1.5k Records", "5 Segments"]),
                ..Self::default()
            },
            Self {
                title: "Sales Dashboard".to_string(),
                challenge: "Leadership had no real-time view of sales indicators, which slowed \
                            strategic decisions."
                    .to_string(),
                solution: "An interactive Power BI dashboard connected straight to the \
                           transactional database, refreshed automatically."
                    .to_string(),
                impact: "Analysis meetings 30% shorter and new cross-selling opportunities found."
                    .to_string(),
                tags: strings(&["Power BI", "DAX", "SQL", "Excel"]),
                metrics: strings(&["Real-time KPIs", "15+ users"]),
                ..Self::default()
            },
            Self {
                title: "Fraud Detection (ML)".to_string(),
                challenge: "A financial institution missed many fraudulent transactions and \
                            took significant losses."
                    .to_string(),
                solution: "An XGBoost model with class balancing and cross-validation to flag \
                           suspicious transactions."
                    .to_string(),
                impact: "95% accuracy, 70% fewer false negatives and an estimated R$ 2 million \
                         saved per year."
                    .to_string(),
                tags: strings(&["Python", "XGBoost", "Scikit-learn", "Pandas"]),
                metrics: strings(&["95% Precision", "2% False Positives"]),
                ..Self::default()
            },
        ]
    }
}

/// A metric split into its value and label.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Metric {
    /// Text before the first space.
    pub value: String,
    /// Everything after the first space. Empty if there is none.
    pub label: String,
}

impl Metric {
    /// Splits `"95% Precision"` into `95%` and `Precision`.
    #[must_use]
    pub fn parse(text: &str) -> Self {
        let (value, label) = text.split_once(' ').unwrap_or((text, ""));
        Self {
            value: value.to_string(),
            label: label.to_string(),
        }
    }
}

/// A link button in the modal footer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectLink {
    /// Button text.
    pub label: &'static str,
    /// Target URL.
    pub href: String,
    /// CSS classes.
    pub class: &'static str,
}

/// Everything the modal shows for one project.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectView {
    /// Title.
    pub title: String,
    /// Challenge paragraph.
    pub challenge: String,
    /// Solution paragraph.
    pub solution: String,
    /// Impact paragraph.
    pub impact: String,
    /// Tag chips.
    pub tags: Vec<String>,
    /// Metric tiles.
    pub metrics: Vec<Metric>,
    /// Footer links: repository, then demo.
    pub links: [ProjectLink; 2],
}

impl From<&Project> for ProjectView {
    fn from(project: &Project) -> Self {
        Self {
            title: project.title.clone(),
            challenge: project.challenge.clone(),
            solution: project.solution.clone(),
            impact: project.impact.clone(),
            tags: project.tags.clone(),
            metrics: project.metrics.iter().map(|m| Metric::parse(m)).collect(),
            links: [
                ProjectLink {
                    label: "GitHub",
                    href: project.repo.clone(),
                    class: "modal-link",
                },
                ProjectLink {
                    label: "Live Demo",
                    href: project.demo.clone(),
                    class: "modal-link secondary",
                },
            ],
        }
    }
}

/// The project detail overlay.
#[derive(Debug, Clone)]
pub struct ProjectModal {
    projects: Vec<Project>,
    view: Option<ProjectView>,
    open: bool,
}

impl ProjectModal {
    /// Class on `<body>` while the modal is open. It locks page scroll.
    pub const BODY_CLASS: &'static str = "modal-open";

    /// Creates a closed modal over a catalog.
    #[must_use]
    pub fn new(projects: Vec<Project>) -> Self {
        Self {
            projects,
            view: None,
            open: false,
        }
    }

    /// Fills the view from project `index` and shows it. `None` if there is
    /// no such project, in which case nothing changes.
    pub fn open(&mut self, index: usize) -> Option<&ProjectView> {
        let project = self.projects.get(index)?;
        tracing::debug!(index, title = %project.title, "project modal opened");
        self.view = Some(ProjectView::from(project));
        self.open = true;
        self.view.as_ref()
    }

    /// Hides the modal. The last view stays filled.
    pub fn close(&mut self) {
        if self.open {
            tracing::debug!("project modal closed");
        }
        self.open = false;
    }

    /// Escape closes the modal, but only while it is open. Returns true if
    /// the key was consumed.
    pub fn on_key(&mut self, key: Key) -> bool {
        if key == Key::Escape && self.open {
            self.close();
            return true;
        }
        false
    }

    /// A click on the overlay itself (not its content) closes the modal.
    pub fn on_overlay_click(&mut self, on_overlay: bool) {
        if on_overlay {
            self.close();
        }
    }

    /// Returns true while shown.
    #[must_use]
    pub fn is_open(&self) -> bool {
        self.open
    }

    /// The view last opened.
    #[must_use]
    pub fn view(&self) -> Option<&ProjectView> {
        self.view.as_ref()
    }

    /// Class to add to `<body>`, if any.
    #[must_use]
    pub fn body_class(&self) -> Option<&'static str> {
        self.open.then_some(Self::BODY_CLASS)
    }

    /// The catalog.
    #[must_use]
    pub fn projects(&self) -> &[Project] {
        &self.projects
    }

    /// Replaces project `index`. Returns false for an out-of-range index.
    pub fn update_project(&mut self, index: usize, project: Project) -> bool {
        match self.projects.get_mut(index) {
            Some(slot) => {
                *slot = project;
                true
            }
            None => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_metric_parse() {
        assert_eq!(
            Metric::parse("95% Precision"),
            Metric {
                value: "95%".to_string(),
                label: "Precision".to_string()
            }
        );
        assert_eq!(Metric::parse("2% False Positives").label, "False Positives");
        assert_eq!(Metric::parse("KPIs").label, "");
    }

    #[test]
    fn test_open_fills_view() {
        let mut modal = ProjectModal::new(Project::defaults());
        let view = modal.open(1).expect("project 1 exists");
        assert_eq!(view.title, "Sales Dashboard");
        assert_eq!(view.tags.len(), 4);
        assert_eq!(view.metrics[1].value, "15+");
        assert_eq!(view.links[0].href, "#");
        assert_eq!(modal.body_class(), Some("modal-open"));
    }

    #[test]
    fn test_open_out_of_range() {
        let mut modal = ProjectModal::new(Project::defaults());
        assert!(modal.open(3).is_none());
        assert!(!modal.is_open());
        assert!(modal.view().is_none());
    }

    #[test]
    fn test_escape_only_while_open() {
        let mut modal = ProjectModal::new(Project::defaults());
        assert!(!modal.on_key(Key::Escape));

        modal.open(0);
        assert!(!modal.on_key(Key::Enter));
        assert!(modal.on_key(Key::Escape));
        assert!(!modal.is_open());
        assert_eq!(modal.body_class(), None);
    }

    #[test]
    fn test_overlay_click() {
        let mut modal = ProjectModal::new(Project::defaults());
        modal.open(2);
        modal.on_overlay_click(false);
        assert!(modal.is_open());
        modal.on_overlay_click(true);
        assert!(!modal.is_open());
    }

    #[test]
    fn test_update_project() {
        let mut modal = ProjectModal::new(Project::defaults());
        let renamed = Project {
            title: "Renamed".to_string(),
            ..Project::default()
        };
        assert!(modal.update_project(0, renamed));
        assert!(!modal.update_project(9, Project::default()));
        assert_eq!(modal.open(0).map(|v| v.title.as_str()), Some("Renamed"));
    }
}
