use challenge_config::ConfigError;

/// Reasons a session command is refused.
///
/// These are precondition failures shown to the user; scoring itself never
/// fails.
#[derive(Debug, thiserror::Error)]
pub enum SubmitError {
    #[error("no challenge loaded")]
    NoChallenge,

    #[error("please upload and analyze an STL file")]
    NoMesh,

    #[error("mesh analysis still in progress")]
    AnalysisPending,

    #[error("please answer all quiz questions ({answered} of {total} answered)")]
    QuizIncomplete { answered: usize, total: usize },

    #[error("challenge already submitted")]
    AlreadySubmitted,

    #[error("challenge was abandoned")]
    Abandoned,

    #[error("unknown question: {id}")]
    UnknownQuestion { id: String },

    #[error("question {question_id} has {count} options, got option {option}")]
    OptionOutOfRange {
        question_id: String,
        option: usize,
        count: usize,
    },

    #[error("challenge config error: {0}")]
    Config(#[from] ConfigError),
}
