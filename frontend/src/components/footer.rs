use shared::FooterContent;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct FooterProps {
    pub footer: FooterContent,
}

#[function_component(Footer)]
pub fn footer(props: &FooterProps) -> Html {
    html! {
        <footer class="site-footer">
            <div class="container footer-inner">
                <p class="copyright">{ &props.footer.copyright }</p>
                <div class="social-links">
                    { for props.footer.social_links.iter().map(|link| html! {
                        <a class="social-link" href={link.href.clone()}>{ &link.label }</a>
                    }) }
                </div>
            </div>
        </footer>
    }
}
