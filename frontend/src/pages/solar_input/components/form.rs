use super::messages::FieldErrorMessage;
use crate::pages::solar_input::utils::FieldErrors;
use crate::pages::solar_input::view_model::SolarInputFormState;
use leptos::{ev::SubmitEvent, *};

#[component]
pub fn SolarInputForm(
    form: SolarInputFormState,
    errors: RwSignal<FieldErrors>,
    #[prop(into)] pending: Signal<bool>,
    on_submit: Callback<SubmitEvent>,
) -> impl IntoView {
    view! {
        <div class="min-h-screen flex items-center justify-center bg-surface py-12 px-4 sm:px-6 lg:px-8">
            <div class="max-w-md w-full space-y-8">
                <div>
                    <h2 class="mt-6 text-center text-3xl font-extrabold text-fg">
                        "Solar Energy System Input"
                    </h2>
                    <p class="mt-2 text-center text-sm text-fg-muted">
                        "Enter the tower site details to estimate equipment needs."
                    </p>
                </div>
                <form class="mt-8 space-y-6" on:submit=move |ev| on_submit.call(ev)>
                    <div>
                        <label for="latitude" class="block text-sm font-medium text-fg">
                            "Latitude"
                        </label>
                        <input
                            id="latitude"
                            name="latitude"
                            type="number"
                            step="any"
                            placeholder="Enter latitude"
                            class="mt-1 appearance-none rounded-md relative block w-full px-3 py-2 border border-form-control-border bg-form-control-bg placeholder-form-control-placeholder text-form-control-text focus:outline-none focus:ring-2 focus:ring-action-primary-focus focus:border-action-primary-border sm:text-sm"
                            prop:value=form.latitude
                            on:input=move |ev| form.latitude.set(event_target_value(&ev))
                        />
                        <FieldErrorMessage error=Signal::derive(move || errors.get().latitude)/>
                    </div>
                    <div>
                        <label for="longitude" class="block text-sm font-medium text-fg">
                            "Longitude"
                        </label>
                        <input
                            id="longitude"
                            name="longitude"
                            type="number"
                            step="any"
                            placeholder="Enter longitude"
                            class="mt-1 appearance-none rounded-md relative block w-full px-3 py-2 border border-form-control-border bg-form-control-bg placeholder-form-control-placeholder text-form-control-text focus:outline-none focus:ring-2 focus:ring-action-primary-focus focus:border-action-primary-border sm:text-sm"
                            prop:value=form.longitude
                            on:input=move |ev| form.longitude.set(event_target_value(&ev))
                        />
                        <FieldErrorMessage error=Signal::derive(move || errors.get().longitude)/>
                    </div>
                    <div>
                        <label for="energy_consumption" class="block text-sm font-medium text-fg">
                            "Tower Energy Consumption Per Day (kWh)"
                        </label>
                        <input
                            id="energy_consumption"
                            name="energy_consumption"
                            type="number"
                            step="any"
                            placeholder="Enter tower energy consumption per day"
                            class="mt-1 appearance-none rounded-md relative block w-full px-3 py-2 border border-form-control-border bg-form-control-bg placeholder-form-control-placeholder text-form-control-text focus:outline-none focus:ring-2 focus:ring-action-primary-focus focus:border-action-primary-border sm:text-sm"
                            prop:value=form.energy_consumption
                            on:input=move |ev| form.energy_consumption.set(event_target_value(&ev))
                        />
                        <FieldErrorMessage error=Signal::derive(move || {
                            errors.get().energy_consumption
                        })/>
                    </div>

                    <div>
                        <button
                            type="submit"
                            disabled=move || pending.get()
                            class="group relative w-full flex justify-center py-2 px-4 border border-transparent text-sm font-medium rounded-md text-action-primary-text bg-action-primary-bg hover:bg-action-primary-bg_hover focus:outline-none focus:ring-2 focus:ring-offset-2 focus:ring-action-primary-focus disabled:opacity-50"
                        >
                            {move || {
                                if pending.get() { "Calculating..." } else { "Calculate Equipment Needs" }
                            }}
                        </button>
                    </div>
                </form>
            </div>
        </div>
    }
}
