//! Shim console: root module wiring the Yew `Component` implementation with
//! submodules for state, update logic, view rendering and the region sink.
//!
//! Responsibilities
//! - Re-export `Msg` and `ConsoleComponent`.
//! - Delegate to `update::update` and `view::view`.
//! - Load the shim registry once, on first render.

use yew::prelude::*;

mod messages;
mod sink;
mod state;
mod update;
mod view;

pub use messages::Msg;
pub use state::ConsoleComponent;

impl Component for ConsoleComponent {
    type Message = Msg;
    type Properties = ();

    fn create(_ctx: &Context<Self>) -> Self {
        ConsoleComponent::new(crate::config::load())
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        update::update(self, ctx, msg)
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        view::view(self, ctx)
    }

    fn rendered(&mut self, ctx: &Context<Self>, first_render: bool) {
        if first_render && !self.loaded {
            self.loaded = true;
            ctx.link().send_message(Msg::LoadShims);
        }
    }
}
