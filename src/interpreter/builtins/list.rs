use crate::{
    error::RuntimeErrorKind,
    interpreter::{
        evaluator::core::EvalResult,
        value::{
            core::{Value, format_number},
            function::NativeCall,
            list::List,
        },
    },
};

/// Reads the parameter `name`, which must hold a list.
fn list_arg(call: &NativeCall<'_>, name: &str, position: &str) -> EvalResult<List> {
    call.arg(name)?
        .as_list()
        .cloned()
        .ok_or_else(|| {
            call.error(RuntimeErrorKind::InvalidArgumentType,
                       format!("{position} argument must be a collection"))
        })
}

/// Appends `value` to `collection` in place and returns `0`.
///
/// Every other value sharing the list sees the new element. Lists are
/// appended as deep copies, so later changes to them do not show up in
/// `collection` and a list never ends up inside itself.
pub fn shove(call: &NativeCall<'_>) -> EvalResult<Value> {
    let collection = list_arg(call, "collection", "First")?;
    let value = call.arg("value")?.deep_copy();

    collection.push(value);
    Ok(Value::from(0.0))
}

/// Removes the element at `index` from `collection` in place and returns it.
///
/// Negative indices count from the end of the list.
///
/// # Errors
/// - `InvalidArgumentType` if the arguments are not a list and a number.
/// - `IndexOutOfBounds` if the index is fractional or outside the list.
pub fn yank(call: &NativeCall<'_>) -> EvalResult<Value> {
    let collection = list_arg(call, "collection", "First")?;
    let index = call.arg("index")?.as_number().ok_or_else(|| {
                                                    call.error(RuntimeErrorKind::InvalidArgumentType,
                                                               "Second argument must be a number")
                                                })?;

    collection.remove(index).ok_or_else(|| {
                                call.error(RuntimeErrorKind::IndexOutOfBounds,
                                           format!("Index {} out of range", format_number(index)))
                            })
}

/// Returns a new list holding the elements of `collectionA` followed by those
/// of `collectionB`. Neither argument is changed.
pub fn stackon(call: &NativeCall<'_>) -> EvalResult<Value> {
    let first = list_arg(call, "collectionA", "First")?;
    let second = list_arg(call, "collectionB", "Second")?;

    let mut items = first.copied_items();
    items.extend(second.copied_items());
    Ok(Value::from(items))
}
