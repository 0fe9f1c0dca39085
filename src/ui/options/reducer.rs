use crate::ui::components::{CheckboxState, DismissReason, ModalState};
use crate::ui::mvi::Reducer;
use crate::ui::options::intent::OptionsIntent;
use crate::ui::options::state::{plot_select, OptionsDialogState, OptionsField};

pub struct OptionsReducer;

impl Reducer for OptionsReducer {
    type State = OptionsDialogState;
    type Intent = OptionsIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            OptionsIntent::Open { current } => {
                let mut modal = ModalState::dialog(OptionsField::ALL.len());
                modal.open();
                OptionsDialogState::Visible {
                    plot: plot_select(current.plot),
                    movies_only: CheckboxState::new(current.movies_only),
                    modal,
                }
            }
            OptionsIntent::Close => OptionsDialogState::Hidden,
            OptionsIntent::Dismiss(reason) => match state {
                // Escape with the list open only closes the list
                OptionsDialogState::Visible {
                    mut plot,
                    movies_only,
                    modal,
                } if plot.is_open() && reason == DismissReason::Escape => {
                    plot.close();
                    OptionsDialogState::Visible {
                        plot,
                        movies_only,
                        modal,
                    }
                }
                OptionsDialogState::Visible {
                    plot,
                    movies_only,
                    mut modal,
                } => {
                    if modal.dismiss(reason) {
                        OptionsDialogState::Hidden
                    } else {
                        OptionsDialogState::Visible {
                            plot,
                            movies_only,
                            modal,
                        }
                    }
                }
                other => other,
            },
            OptionsIntent::FocusNext | OptionsIntent::FocusPrev | OptionsIntent::Focus(_) => {
                match state {
                    OptionsDialogState::Visible {
                        mut plot,
                        movies_only,
                        mut modal,
                    } => {
                        plot.close();
                        match intent {
                            OptionsIntent::FocusNext => modal.focus_next(),
                            OptionsIntent::FocusPrev => modal.focus_prev(),
                            OptionsIntent::Focus(field) => modal.set_focus(field.index()),
                            _ => {}
                        }
                        OptionsDialogState::Visible {
                            plot,
                            movies_only,
                            modal,
                        }
                    }
                    other => other,
                }
            }
            OptionsIntent::Activate => {
                let field = state.focused_field();
                match state {
                    OptionsDialogState::Visible {
                        mut plot,
                        mut movies_only,
                        modal,
                    } => {
                        match field {
                            Some(OptionsField::Plot) if plot.is_open() => {
                                plot.commit();
                            }
                            Some(OptionsField::Plot) => plot.open(),
                            Some(OptionsField::MoviesOnly) => {
                                movies_only.toggle();
                            }
                            Some(OptionsField::Apply) | None => {}
                        }
                        OptionsDialogState::Visible {
                            plot,
                            movies_only,
                            modal,
                        }
                    }
                    other => other,
                }
            }
            OptionsIntent::PickPlot(index) => match state {
                OptionsDialogState::Visible {
                    mut plot,
                    movies_only,
                    mut modal,
                } if plot.is_open() => {
                    plot.pick(index);
                    modal.set_focus(OptionsField::Plot.index());
                    OptionsDialogState::Visible {
                        plot,
                        movies_only,
                        modal,
                    }
                }
                other => other,
            },
            OptionsIntent::CloseList => match state {
                OptionsDialogState::Visible {
                    mut plot,
                    movies_only,
                    modal,
                } => {
                    plot.close();
                    OptionsDialogState::Visible {
                        plot,
                        movies_only,
                        modal,
                    }
                }
                other => other,
            },
            OptionsIntent::MoveUp | OptionsIntent::MoveDown => match state {
                OptionsDialogState::Visible {
                    mut plot,
                    movies_only,
                    modal,
                } => {
                    if matches!(intent, OptionsIntent::MoveUp) {
                        plot.highlight_prev();
                    } else {
                        plot.highlight_next();
                    }
                    OptionsDialogState::Visible {
                        plot,
                        movies_only,
                        modal,
                    }
                }
                other => other,
            },
        }
    }
}
