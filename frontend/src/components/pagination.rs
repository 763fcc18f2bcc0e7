use yew::prelude::*;

/// Page numbers to offer as buttons, 1-based. Never goes past `num_pages`.
pub fn page_numbers(num_pages: u32) -> impl Iterator<Item = u32> {
    1..=num_pages
}

#[derive(Properties, PartialEq)]
pub struct PaginationProps {
    pub num_pages: u32,
    pub current_page: u32,
    pub on_select: Callback<u32>,
}

#[function_component(Pagination)]
pub fn pagination(props: &PaginationProps) -> Html {
    if props.num_pages <= 1 {
        return html! {};
    }

    html! {
        <div class="flex items-center justify-center gap-2 py-4">
            { for page_numbers(props.num_pages).map(|page| {
                let class_name = if page == props.current_page {
                    "w-9 h-9 rounded-lg text-sm font-bold bg-primary text-primary-foreground"
                } else {
                    "w-9 h-9 rounded-lg text-sm font-medium bg-secondary text-secondary-foreground hover:opacity-80"
                };
                let on_select = props.on_select.clone();
                html! {
                    <button type="button" class={class_name} onclick={Callback::from(move |_| on_select.emit(page))}>
                        { page }
                    </button>
                }
            }) }
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::page_numbers;

    #[test]
    fn offers_each_page_once() {
        assert_eq!(page_numbers(3).collect::<Vec<_>>(), [1, 2, 3]);
    }

    #[test]
    fn never_offers_page_past_the_end() {
        let pages: Vec<u32> = page_numbers(4).collect();
        assert!(!pages.contains(&5));
        assert_eq!(pages.last(), Some(&4));
    }

    #[test]
    fn no_pages_no_buttons() {
        assert_eq!(page_numbers(0).count(), 0);
    }
}
