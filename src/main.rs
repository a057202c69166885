use serde::Deserialize;
use web_sys::{Event, HtmlInputElement};
use yew::events::{InputEvent, MouseEvent};
use yew::prelude::*;
use yew::TargetCast;

mod editor;

use editor::{AnswerList, QuestionType};

// Admin routes owned by the backend; this page only links/submits to them.
const SUBMIT_URL: &str = "/admin/questions/add/redirect/";
const QUESTION_LIST_URL: &str = "/admin/questions";

// The backend renders the known user names into this element.
const PAGE_CONTEXT_ID: &str = "page-context";

#[derive(Clone, PartialEq, Deserialize, Debug, Default)]
struct PageContext {
    users: Vec<String>,
}

#[function_component(App)]
fn app() -> Html {
    let question = use_state(|| "".to_string());
    let question_type = use_state(QuestionType::default);
    let answers = use_state(AnswerList::new);

    // Read once on mount; the user list is fixed for the page's lifetime.
    let context = use_state(load_page_context);

    let (page_context, error) = match &*context {
        Ok(ctx) => (ctx.clone(), None),
        Err(msg) => (PageContext::default(), Some(msg.clone())),
    };

    // Input handlers
    let on_question_input = {
        let question = question.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            question.set(input.value());
        })
    };

    let on_type_toggle = {
        let question_type = question_type.clone();
        Callback::from(move |e: Event| {
            let input: HtmlInputElement = e.target_unchecked_into();
            question_type.set(QuestionType::from_checked(input.checked()));
        })
    };

    let on_add_row = {
        let answers = answers.clone();
        Callback::from(move |_: MouseEvent| {
            let mut list = (*answers).clone();
            list.add("");
            answers.set(list);
        })
    };

    let on_remove_row = {
        let answers = answers.clone();
        Callback::from(move |row_id: usize| {
            let mut list = (*answers).clone();
            list.remove(row_id);
            answers.set(list);
        })
    };

    let on_row_input = {
        let answers = answers.clone();
        Callback::from(move |(row_id, value): (usize, String)| {
            let mut list = (*answers).clone();
            list.set_value(row_id, value);
            answers.set(list);
        })
    };

    // One row per known user, appended after whatever is already there.
    let on_populate_users = {
        let answers = answers.clone();
        let users = page_context.users.clone();
        Callback::from(move |_: MouseEvent| {
            let mut list = (*answers).clone();
            list.prepopulate(&users);
            answers.set(list);
        })
    };

    html! {
        <div class="app-shell">
            <header>
                <h1>{"Add question"}</h1>
                <p class="sub">
                    {"Write the question, then either leave it as a free-text answer or tick \"Multiple choice\" and manage the answer list."}
                </p>
            </header>

            <main>
                if let Some(err) = &error {
                    <div class="error">
                        {err}
                    </div>
                }

                // No method attribute: the backend reads this as a plain GET.
                <form action={SUBMIT_URL}>
                    <section>
                        <label for="question">{"Question"}</label>
                        <input
                            type="text"
                            id="question"
                            name="question"
                            placeholder="What is your favourite colour?"
                            value={(*question).clone()}
                            oninput={on_question_input}
                        />

                        <label class="choice">
                            <input
                                type="checkbox"
                                name="type"
                                checked={question_type.is_multi()}
                                onchange={on_type_toggle}
                            />
                            {"Multiple choice"}
                        </label>
                    </section>

                    {
                        render_answer_editor(
                            &answers,
                            question_type.is_multi(),
                            &on_add_row,
                            &on_remove_row,
                            &on_row_input,
                            &on_populate_users,
                        )
                    }

                    <div class="actions">
                        <button type="submit" class="btn btn-primary">{"Save"}</button>
                        <a class="btn btn-secondary" href={QUESTION_LIST_URL}>{"Cancel"}</a>
                    </div>
                </form>
            </main>

            <footer class="footer">
                <span>{"Quiz admin · add question"}</span>
            </footer>
        </div>
    }
}

// --- Helper rendering functions -------------------------------------------------

fn render_answer_editor(
    answers: &UseStateHandle<AnswerList>,
    visible: bool,
    on_add_row: &Callback<MouseEvent>,
    on_remove_row: &Callback<usize>,
    on_row_input: &Callback<(usize, String)>,
    on_populate_users: &Callback<MouseEvent>,
) -> Html {
    // Hidden, not unmounted: rows added in multi mode must still submit
    // even if the box is unticked again before saving.
    let style = if visible { "" } else { "display: none;" };

    html! {
        <section class="answer-editor" style={style}>
            <h2>{"Possible answers"}</h2>
            <div class="answer-rows">
                {
                    for answers.rows().iter().map(|row| {
                        let field = row.field_name();

                        let on_input = {
                            let on_row_input = on_row_input.clone();
                            let row_id = row.id;
                            Callback::from(move |e: InputEvent| {
                                let input: HtmlInputElement = e.target_unchecked_into();
                                on_row_input.emit((row_id, input.value()));
                            })
                        };

                        let on_remove = {
                            let on_remove_row = on_remove_row.clone();
                            let row_id = row.id;
                            Callback::from(move |_: MouseEvent| {
                                on_remove_row.emit(row_id);
                            })
                        };

                        html! {
                            <div class="answer-row" key={row.id.to_string()}>
                                <input
                                    type="text"
                                    id={field.clone()}
                                    name={field}
                                    value={row.value.clone()}
                                    oninput={on_input}
                                />
                                <button type="button" class="btn btn-secondary" onclick={on_remove}>
                                    {"Remove"}
                                </button>
                            </div>
                        }
                    })
                }
            </div>

            <button type="button" class="btn btn-secondary" onclick={on_add_row.clone()}>
                {"Add answer"}
            </button>
            <button type="button" class="btn btn-secondary" onclick={on_populate_users.clone()}>
                {"Users"}
            </button>
        </section>
    }
}

// --- Page context ---------------------------------------------------------------

fn load_page_context() -> Result<PageContext, String> {
    let document = web_sys::window()
        .and_then(|w| w.document())
        .ok_or_else(|| "No document available.".to_string())?;

    let node = document
        .get_element_by_id(PAGE_CONTEXT_ID)
        .ok_or_else(|| format!("Page context element #{} is missing.", PAGE_CONTEXT_ID))?;

    parse_page_context(&node.text_content().unwrap_or_default())
}

fn parse_page_context(raw: &str) -> Result<PageContext, String> {
    serde_json::from_str(raw).map_err(|e| format!("Could not read the page context. ({})", e))
}

// -----------------------------------------------------------------------------

fn main() {
    yew::Renderer::<App>::new().render();
}
