//! Data model shared by the loader, the flattener and the renderer

/// Hours value emitted when a task line has no trailing `(hours)` group
pub const SENTINEL: &str = "!!!";

/// One node of the parsed outline document
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OutlineNode {
    /// An `outline` element: a month, a date or a task line depending on depth
    Container {
        label: Option<String>,
        children: Vec<OutlineNode>,
    },
    /// Any other element found among the outlines (only its tag name is kept)
    Artifact(String),
}

impl OutlineNode {
    /// Create a container with a label
    #[allow(dead_code)]
    pub fn container(label: impl Into<String>, children: Vec<OutlineNode>) -> Self {
        OutlineNode::Container {
            label: Some(label.into()),
            children,
        }
    }

    /// Create a childless container, i.e. a task line
    #[allow(dead_code)]
    pub fn leaf(label: impl Into<String>) -> Self {
        Self::container(label, Vec::new())
    }

    /// Label text, empty when absent or when this is not a container
    pub fn label(&self) -> &str {
        match self {
            OutlineNode::Container { label, .. } => label.as_deref().unwrap_or(""),
            OutlineNode::Artifact(_) => "",
        }
    }

    /// Count container nodes in this subtree (including self)
    pub fn container_count(&self) -> usize {
        match self {
            OutlineNode::Container { children, .. } => {
                1 + children.iter().map(Self::container_count).sum::<usize>()
            }
            OutlineNode::Artifact(_) => 0,
        }
    }
}

/// One invoice line: date, task description and hours (raw text)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputRecord {
    pub date: String,
    pub task: String,
    pub hours: String,
}

impl OutputRecord {
    pub fn new(date: impl Into<String>, task: impl Into<String>, hours: impl Into<String>) -> Self {
        Self {
            date: date.into(),
            task: task.into(),
            hours: hours.into(),
        }
    }

    /// True when the hours need hand editing: the sentinel, or an empty `( )` group
    pub fn needs_attention(&self) -> bool {
        self.hours == SENTINEL || self.hours.is_empty()
    }
}
