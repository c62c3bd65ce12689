pub use crate::errors::{print_error, to_report, ErrorType, SeqError, SeqResult};
pub use crate::functions::{
    bind_function, bind_function_with, return_arguments_array, return_counter,
    return_first_argument, return_fn_result, sum_with_defaults, Counter,
};
pub use crate::objects::{upper_keys, upper_props};
pub use crate::sequence::{
    clamped_slice, fold, fold_from, iterate, normalize_index, transform, Sequence,
};

pub mod errors;
pub mod functions;
pub mod objects;
pub mod sequence;
