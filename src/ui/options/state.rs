use crate::omdb::{LookupRequest, PlotLength};
use crate::ui::components::{CheckboxState, ModalState, SelectItem, SelectState};
use crate::ui::mvi::UiState;

/// Lookup options chosen in the dialog, applied to every later search.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SearchOptions {
    pub plot: PlotLength,
    pub movies_only: bool,
}

impl SearchOptions {
    pub fn request_for(&self, title: impl Into<String>) -> LookupRequest {
        LookupRequest::new(title)
            .with_plot(self.plot)
            .with_movies_only(self.movies_only)
    }
}

/// Focusable elements of the dialog, in Tab order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OptionsField {
    Plot,
    MoviesOnly,
    Apply,
}

impl OptionsField {
    pub const ALL: [OptionsField; 3] = [
        OptionsField::Plot,
        OptionsField::MoviesOnly,
        OptionsField::Apply,
    ];

    pub fn index(self) -> usize {
        match self {
            OptionsField::Plot => 0,
            OptionsField::MoviesOnly => 1,
            OptionsField::Apply => 2,
        }
    }

    fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }
}

pub(super) fn plot_select(plot: PlotLength) -> SelectState {
    SelectState::new(vec![
        SelectItem::option(PlotLength::Short.as_str(), "Short"),
        SelectItem::option(PlotLength::Full.as_str(), "Full"),
    ])
    .with_selected_value(plot.as_str())
}

#[derive(Debug, Clone, PartialEq, Default)]
pub enum OptionsDialogState {
    #[default]
    Hidden,
    Visible {
        plot: SelectState,
        movies_only: CheckboxState,
        modal: ModalState,
    },
}

impl UiState for OptionsDialogState {}

impl OptionsDialogState {
    pub fn is_visible(&self) -> bool {
        !matches!(self, Self::Hidden)
    }

    pub fn focused_field(&self) -> Option<OptionsField> {
        match self {
            Self::Visible { modal, .. } => OptionsField::from_index(modal.focus()),
            Self::Hidden => None,
        }
    }

    pub fn plot(&self) -> Option<&SelectState> {
        match self {
            Self::Visible { plot, .. } => Some(plot),
            Self::Hidden => None,
        }
    }

    /// True while the plot dropdown list is open.
    pub fn is_select_open(&self) -> bool {
        matches!(self, Self::Visible { plot, .. } if plot.is_open())
    }

    /// Options as currently edited in the dialog.
    pub fn options(&self) -> Option<SearchOptions> {
        match self {
            Self::Visible {
                plot, movies_only, ..
            } => Some(SearchOptions {
                plot: plot
                    .selected_value()
                    .and_then(PlotLength::from_value)
                    .unwrap_or_default(),
                movies_only: movies_only.is_checked(),
            }),
            Self::Hidden => None,
        }
    }
}
