#[macro_export]
/// Allow defining an async callback that can be used in Yew components.
/// Every listed variable is cloned once for the callback and again for each
/// spawned task, so the body can `.await` freely. The emitted value is moved
/// into the task under the given name.
///
/// The body runs on a later tick, so anything that must happen synchronously
/// (such as `prevent_default` or an in-flight guard) belongs in a plain
/// callback that emits this one.
///
/// ```compile_fail
/// let submit = async_callback!([api, error_msg] |draft: PostDraft| {
///     if let Err(err) = submit_post(&*api, game_id, &draft).await {
///         error_msg.set(Some(err.user_message()));
///     }
/// });
///
/// let on_submit = Callback::from(move |event: SubmitEvent| {
///     event.prevent_default();
///     submit.emit(current_draft());
/// });
/// ```
macro_rules! async_callback {
    ([$($var:ident),* $(,)?] |$arg:ident : $ty:ty| $body:expr) => {
        {
            $(let $var = $var.clone();)*
            Callback::from(move |$arg: $ty| {
                $(let $var = $var.clone();)*
                wasm_bindgen_futures::spawn_local(async move {
                    $body
                });
            })
        }
    };
}
