use serenity::builder::{CreateActionRow, CreateButton, CreateEmbed, CreateInputText, CreateModal};
use serenity::model::application::{ButtonStyle, InputTextStyle};
use serenity::model::colour::Colour;
use serenity::model::id::UserId;
use serenity::model::mention::Mentionable;

// Stable custom IDs: the panels are persistent, so the buttons and modals
// have to keep resolving after a process restart.
pub const CREATE_TICKET_BUTTON: &str = "create_ticket:blurple";
pub const ADD_USER_BUTTON: &str = "ticket_settings:green";
pub const REMOVE_USER_BUTTON: &str = "ticket_settings:gray";
pub const CLOSE_TICKET_BUTTON: &str = "ticket_settings:red";
pub const ADD_USER_MODAL: &str = "ticket_add_user";
pub const REMOVE_USER_MODAL: &str = "ticket_remove_user";
pub const USER_ID_INPUT: &str = "user_id";

pub fn ticket_panel_embed() -> CreateEmbed {
    CreateEmbed::new()
        .title("Support / Services")
        .description(
            "Click on the `Create Ticket!` Button to create a ticket. \
             And our staff will respond within 24 - 48 hrs.",
        )
        .colour(Colour::BLURPLE)
}

pub fn ticket_panel_buttons() -> Vec<CreateActionRow> {
    vec![CreateActionRow::Buttons(vec![
        CreateButton::new(CREATE_TICKET_BUTTON)
            .label("Create Ticket")
            .style(ButtonStyle::Primary),
    ])]
}

pub fn ticket_controls_embed(opened_by: UserId) -> CreateEmbed {
    CreateEmbed::new()
        .title("Ticket Created!")
        .description(format!(
            "Ticket created by {}! Click any of the buttons below to add/remove \
             users or delete the ticket and receive the transcript!",
            opened_by.mention()
        ))
        .colour(Colour::BLURPLE)
}

pub fn ticket_control_buttons() -> Vec<CreateActionRow> {
    vec![CreateActionRow::Buttons(vec![
        CreateButton::new(ADD_USER_BUTTON)
            .label("Add User")
            .style(ButtonStyle::Success),
        CreateButton::new(REMOVE_USER_BUTTON)
            .label("Remove User")
            .style(ButtonStyle::Secondary),
        CreateButton::new(CLOSE_TICKET_BUTTON)
            .label("Close Ticket")
            .style(ButtonStyle::Danger),
    ])]
}

pub fn user_id_modal(custom_id: &str, title: &str) -> CreateModal {
    CreateModal::new(custom_id, title).components(vec![CreateActionRow::InputText(
        CreateInputText::new(InputTextStyle::Short, "User ID", USER_ID_INPUT)
            .placeholder("User ID (Must be INT)")
            .min_length(2)
            .max_length(30)
            .required(true),
    )])
}
