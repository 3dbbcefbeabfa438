use catalog::forms::{
    AuthFormData, FormField, LOGIN_DELAY, REGISTER_DELAY, login_success_message,
    registration_success_message,
};
use catalog::landing::{ACADEMY_BADGES, MEMBER_BENEFITS};
use catalog::session::BOOKABLE_SPORTS;
use web_sys::HtmlInputElement;
use yew::prelude::*;

use crate::components::TabBar;
use crate::contexts::toast::use_toast;
use crate::hooks::{use_simulated_request, use_title};

#[derive(Clone, Copy, PartialEq)]
enum AuthMode {
    Login,
    Register,
}

#[function_component]
pub fn AuthPage() -> Html {
    use_title("Sign In");

    let mode = use_state(|| AuthMode::Login);
    let form = use_state(AuthFormData::default);
    let show_password = use_state(|| false);

    let on_tab = {
        let mode = mode.clone();
        Callback::from(move |index: usize| {
            mode.set(if index == 0 { AuthMode::Login } else { AuthMode::Register })
        })
    };

    let on_field = {
        let form = form.clone();
        Callback::from(move |(field, value): (FormField, String)| {
            let mut next = (*form).clone();
            next.set(field, value);
            form.set(next);
        })
    };

    let toggle_password = {
        let show_password = show_password.clone();
        Callback::from(move |_: MouseEvent| show_password.set(!*show_password))
    };

    html! {
        <div class="min-h-screen bg-gradient-to-br from-blue-50 via-white to-green-50 flex items-center justify-center p-4">
            <div class="w-full max-w-6xl grid grid-cols-1 lg:grid-cols-2 gap-8 items-center">
                <div class="space-y-8">
                    <div>
                        <h1 class="text-5xl font-bold mb-4 bg-gradient-to-r from-blue-600 to-green-600 bg-clip-text text-transparent">
                            {"Join Elite Sports Academy"}
                        </h1>
                        <p class="text-xl text-gray-600 mb-8">
                            {"Connect with world-class coaches and unlock your athletic potential with AI-powered training insights."}
                        </p>
                    </div>

                    <div class="grid grid-cols-1 md:grid-cols-2 gap-6">
                        {for MEMBER_BENEFITS.iter().map(|benefit| html! {
                            <div class="flex items-start gap-4 p-4 bg-white/60 rounded-lg">
                                <div class="text-2xl">{benefit.glyph}</div>
                                <div>
                                    <h3 class="font-semibold mb-1">{benefit.title}</h3>
                                    <p class="text-sm text-gray-600">{benefit.description}</p>
                                </div>
                            </div>
                        })}
                    </div>

                    <div class="flex flex-wrap gap-2">
                        {for ACADEMY_BADGES.iter().map(|badge| html! {
                            <span class="px-4 py-2 rounded-full bg-blue-100 text-blue-800">{*badge}</span>
                        })}
                    </div>
                </div>

                <div class="w-full max-w-md mx-auto rounded-lg border bg-white shadow-xl p-6 space-y-6">
                    <div class="text-center">
                        <h2 class="text-2xl font-bold">{"Welcome"}</h2>
                        <p class="text-sm text-gray-500">{"Sign in to your account or create a new one"}</p>
                    </div>

                    <TabBar
                        labels={vec![AttrValue::from("Login"), AttrValue::from("Sign Up")]}
                        active={if *mode == AuthMode::Login { 0 } else { 1 }}
                        on_select={on_tab}
                    />

                    {match *mode {
                        AuthMode::Login => html! {
                            <LoginPanel
                                form={(*form).clone()}
                                on_field={on_field.clone()}
                                show_password={*show_password}
                                on_toggle_password={toggle_password.clone()}
                            />
                        },
                        AuthMode::Register => html! {
                            <RegisterPanel
                                form={(*form).clone()}
                                {on_field}
                                show_password={*show_password}
                                on_toggle_password={toggle_password}
                            />
                        },
                    }}

                    <SocialButtons />
                </div>
            </div>
        </div>
    }
}

#[derive(Properties, PartialEq)]
struct PanelProps {
    form: AuthFormData,
    on_field: Callback<(FormField, String)>,
    show_password: bool,
    on_toggle_password: Callback<MouseEvent>,
}

#[function_component]
fn LoginPanel(props: &PanelProps) -> Html {
    let toasts = use_toast();
    let request = use_simulated_request();

    let onsubmit = {
        let form = props.form.clone();
        let request = request.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            if let Err(error) = form.validate_login() {
                toasts.error(error.to_string());
                return;
            }
            let toasts = toasts.clone();
            request.run("login", LOGIN_DELAY, move || {
                toasts.success(login_success_message())
            });
        })
    };

    html! {
        <form {onsubmit} class="space-y-4">
            <TextField
                label="Email" field={FormField::Email} input_type="email"
                placeholder="Enter your email" form={props.form.clone()} on_field={props.on_field.clone()}
            />
            <PasswordField
                label="Password" field={FormField::Password} placeholder="Enter your password"
                form={props.form.clone()} on_field={props.on_field.clone()}
                visible={props.show_password} on_toggle={props.on_toggle_password.clone()}
            />

            <div class="flex items-center justify-between text-sm">
                <label class="flex items-center gap-2">
                    <input type="checkbox" class="rounded" />
                    <span>{"Remember me"}</span>
                </label>
                <a href="#" class="text-blue-600 hover:underline">{"Forgot password?"}</a>
            </div>

            <SubmitButton
                loading={request.is_loading()}
                label="Sign In"
                loading_label="Signing in..."
            />
        </form>
    }
}

#[function_component]
fn RegisterPanel(props: &PanelProps) -> Html {
    let toasts = use_toast();
    let request = use_simulated_request();

    let onsubmit = {
        let form = props.form.clone();
        let request = request.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            if let Err(error) = form.validate_registration() {
                toasts.error(error.to_string());
                return;
            }
            let toasts = toasts.clone();
            request.run("register", REGISTER_DELAY, move || {
                toasts.success(registration_success_message())
            });
        })
    };

    let on_sport = {
        let on_field = props.on_field.clone();
        Callback::from(move |e: Event| {
            let select: web_sys::HtmlSelectElement = e.target_unchecked_into();
            on_field.emit((FormField::Sport, select.value()));
        })
    };

    html! {
        <form {onsubmit} class="space-y-4">
            <div class="grid grid-cols-2 gap-4">
                <TextField
                    label="First Name" field={FormField::FirstName} placeholder="John"
                    form={props.form.clone()} on_field={props.on_field.clone()}
                />
                <TextField
                    label="Last Name" field={FormField::LastName} placeholder="Doe"
                    form={props.form.clone()} on_field={props.on_field.clone()}
                />
            </div>
            <TextField
                label="Email" field={FormField::Email} input_type="email"
                placeholder="john@example.com" form={props.form.clone()} on_field={props.on_field.clone()}
            />

            <div>
                <label class="block text-sm font-medium mb-1">{"Primary Sport"}</label>
                <select
                    value={props.form.get(FormField::Sport).to_string()}
                    onchange={on_sport}
                    class="w-full px-3 py-2 border border-gray-300 rounded-md bg-white"
                >
                    <option value="" disabled={true}>{"Select your sport"}</option>
                    {for BOOKABLE_SPORTS.iter().map(|sport| html! {
                        <option value={*sport}>{*sport}</option>
                    })}
                </select>
            </div>

            <PasswordField
                label="Password" field={FormField::Password} placeholder="Create a password"
                form={props.form.clone()} on_field={props.on_field.clone()}
                visible={props.show_password} on_toggle={props.on_toggle_password.clone()}
            />
            <TextField
                label="Confirm Password" field={FormField::ConfirmPassword} input_type="password"
                placeholder="Confirm your password" form={props.form.clone()} on_field={props.on_field.clone()}
            />

            <label class="flex items-center gap-2 text-sm">
                <input type="checkbox" class="rounded" />
                <span>
                    {"I agree to the "}
                    <a href="#" class="text-blue-600 hover:underline">{"Terms of Service"}</a>
                    {" and "}
                    <a href="#" class="text-blue-600 hover:underline">{"Privacy Policy"}</a>
                </span>
            </label>

            <SubmitButton
                loading={request.is_loading()}
                label="Create Account"
                loading_label="Creating account..."
            />
        </form>
    }
}

#[derive(Properties, PartialEq)]
struct TextFieldProps {
    label: AttrValue,
    field: FormField,
    #[prop_or_else(|| "text".into())]
    input_type: AttrValue,
    placeholder: AttrValue,
    form: AuthFormData,
    on_field: Callback<(FormField, String)>,
}

#[function_component]
fn TextField(props: &TextFieldProps) -> Html {
    let oninput = {
        let field = props.field;
        props.on_field.reform(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            (field, input.value())
        })
    };

    html! {
        <div>
            <label class="block text-sm font-medium mb-1">{&props.label}</label>
            <input
                type={props.input_type.clone()}
                placeholder={props.placeholder.clone()}
                value={props.form.get(props.field).to_string()}
                {oninput}
                class="w-full px-3 py-2 border border-gray-300 rounded-md focus:outline-none focus:ring-2 focus:ring-blue-500"
            />
        </div>
    }
}

#[derive(Properties, PartialEq)]
struct PasswordFieldProps {
    label: AttrValue,
    field: FormField,
    placeholder: AttrValue,
    form: AuthFormData,
    on_field: Callback<(FormField, String)>,
    visible: bool,
    on_toggle: Callback<MouseEvent>,
}

/// Password input with a show/hide toggle.
#[function_component]
fn PasswordField(props: &PasswordFieldProps) -> Html {
    let oninput = {
        let field = props.field;
        props.on_field.reform(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            (field, input.value())
        })
    };

    html! {
        <div>
            <label class="block text-sm font-medium mb-1">{&props.label}</label>
            <div class="relative">
                <input
                    type={if props.visible { "text" } else { "password" }}
                    placeholder={props.placeholder.clone()}
                    value={props.form.get(props.field).to_string()}
                    {oninput}
                    class="w-full px-3 py-2 pr-10 border border-gray-300 rounded-md focus:outline-none focus:ring-2 focus:ring-blue-500"
                />
                <button
                    type="button"
                    onclick={props.on_toggle.clone()}
                    class="absolute right-2 top-1/2 -translate-y-1/2 text-gray-500"
                    aria-label={if props.visible { "Hide password" } else { "Show password" }}
                >
                    {if props.visible { "🙈" } else { "👁" }}
                </button>
            </div>
        </div>
    }
}

#[derive(Properties, PartialEq)]
struct SubmitButtonProps {
    loading: bool,
    label: AttrValue,
    loading_label: AttrValue,
}

#[function_component]
fn SubmitButton(props: &SubmitButtonProps) -> Html {
    html! {
        <button
            type="submit"
            disabled={props.loading}
            class="w-full py-2 rounded-md bg-gradient-to-r from-blue-600 to-green-600 hover:from-blue-700 hover:to-green-700 text-white disabled:opacity-50"
        >
            if props.loading {
                {props.loading_label.clone()}
            } else {
                {props.label.clone()}
            }
        </button>
    }
}

#[function_component]
fn SocialButtons() -> Html {
    html! {
        <div>
            <div class="relative my-4 text-center text-xs uppercase text-gray-500">
                <span class="bg-white px-2">{"Or sign up with"}</span>
            </div>
            <div class="grid grid-cols-2 gap-4">
                <button type="button" class="py-2 rounded-md border hover:bg-gray-100">{"Google"}</button>
                <button type="button" class="py-2 rounded-md border hover:bg-gray-100">{"Facebook"}</button>
            </div>
        </div>
    }
}
