pub mod experience_details;
pub mod featured_card;
pub mod featured_list;
pub mod not_found;

#[cfg(test)]
pub(crate) mod test_util {
    use yew::{BaseComponent, ServerRenderer};

    pub async fn render<C>(props: impl FnOnce() -> C::Properties + Send + 'static) -> String
    where
        C: BaseComponent,
    {
        ServerRenderer::<C>::with_props(props)
            .hydratable(false)
            .render()
            .await
    }
}
