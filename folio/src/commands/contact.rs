use anyhow::{bail, Context};
use clap::{Args, Subcommand};
use folio_config::Config;
use folio_core_contact_contracts::ContactService;
use folio_models::{
    contact::{ContactField, ContactForm, ContactInfo},
    handoff::Handoff,
    status::SubmissionStatus,
};
use folio_shared_contracts::navigator::NavigatorService;
use folio_shared_impl::navigator::{PrintNavigatorService, SystemNavigatorService};

use crate::environment;

#[derive(Debug, Subcommand)]
pub enum ContactCommand {
    /// Compose the message in the default email client
    Mailto {
        #[command(flatten)]
        form: FormArgs,
        #[command(flatten)]
        target: TargetArgs,
    },
    /// Open a WhatsApp chat prefilled with the message
    #[command(aliases(["wa"]))]
    Whatsapp {
        #[command(flatten)]
        form: FormArgs,
        #[command(flatten)]
        target: TargetArgs,
    },
    /// Send the message through the email relay
    Relay {
        #[command(flatten)]
        form: FormArgs,
    },
    /// Call the configured phone number
    Call {
        #[command(flatten)]
        target: TargetArgs,
    },
    /// Write an email to the configured address
    Email {
        #[command(flatten)]
        target: TargetArgs,
    },
    /// Open a WhatsApp chat without a prefilled message
    OpenWhatsapp {
        #[command(flatten)]
        target: TargetArgs,
    },
    /// Open a social profile
    Social {
        /// The platform name, case insensitive
        platform: String,
        #[command(flatten)]
        target: TargetArgs,
    },
    /// Show the contact details
    Info,
}

#[derive(Debug, Args)]
pub struct FormArgs {
    #[arg(long, default_value = "")]
    name: String,
    #[arg(long, default_value = "")]
    email: String,
    #[arg(long, default_value = "")]
    subject: String,
    #[arg(long, default_value = "")]
    message: String,
}

impl From<FormArgs> for ContactForm {
    fn from(value: FormArgs) -> Self {
        Self {
            name: value.name,
            email: value.email,
            subject: value.subject,
            message: value.message,
        }
    }
}

#[derive(Debug, Args)]
pub struct TargetArgs {
    /// Print the url instead of opening it
    #[arg(long)]
    print: bool,
}

/// Navigator selected on the command line.
#[derive(Debug, Clone, Copy)]
enum Navigator {
    System(SystemNavigatorService),
    Print(PrintNavigatorService),
}

impl NavigatorService for Navigator {
    fn hand_off(&self, handoff: Handoff) {
        match self {
            Navigator::System(navigator) => navigator.hand_off(handoff),
            Navigator::Print(navigator) => navigator.hand_off(handoff),
        }
    }
}

impl TargetArgs {
    fn navigator(&self) -> Navigator {
        if self.print {
            Navigator::Print(PrintNavigatorService)
        } else {
            Navigator::System(SystemNavigatorService)
        }
    }
}

#[derive(Debug, Clone, Copy)]
enum Channel {
    Mailto,
    Whatsapp,
    Relay,
}

impl ContactCommand {
    pub async fn invoke(self, config: Config) -> anyhow::Result<()> {
        match self {
            ContactCommand::Mailto { form, target } => {
                submit(&config, target.navigator(), Channel::Mailto, form.into()).await
            }
            ContactCommand::Whatsapp { form, target } => {
                submit(&config, target.navigator(), Channel::Whatsapp, form.into()).await
            }
            ContactCommand::Relay { form } => {
                // a relay submission never hands anything off
                let navigator = Navigator::Print(PrintNavigatorService);
                submit(&config, navigator, Channel::Relay, form.into()).await
            }
            ContactCommand::Call { target } => {
                environment::component(&config, target.navigator()).call_phone();
                Ok(())
            }
            ContactCommand::Email { target } => {
                environment::component(&config, target.navigator()).send_email();
                Ok(())
            }
            ContactCommand::OpenWhatsapp { target } => {
                environment::component(&config, target.navigator()).open_whatsapp();
                Ok(())
            }
            ContactCommand::Social { platform, target } => {
                let component = environment::component(&config, target.navigator());
                let info = component.info();
                let link = info
                    .social_link(&platform)
                    .with_context(|| format!("Unknown social platform {platform:?}"))?;
                component.open_social_link(link);
                Ok(())
            }
            ContactCommand::Info => {
                print_info(&environment::contact(&config).info());
                Ok(())
            }
        }
    }
}

async fn submit(
    config: &Config,
    navigator: Navigator,
    channel: Channel,
    form: ContactForm,
) -> anyhow::Result<()> {
    let component = environment::component(config, navigator);
    for field in ContactField::ALL {
        component.set_field(field, form.get(field));
    }

    let ok = match channel {
        Channel::Mailto => component.submit_mailto(),
        Channel::Whatsapp => component.submit_whatsapp(),
        Channel::Relay => component.submit_relay().await,
    };

    match component.status() {
        SubmissionStatus::Success(message) if ok => {
            eprintln!("{message}");
            Ok(())
        }
        SubmissionStatus::Error(message) => bail!(message),
        _ => {
            for field in ContactField::ALL {
                let error = component.field_error(field);
                if !error.is_empty() {
                    eprintln!("{field}: {error}");
                }
            }
            bail!("The contact form is invalid")
        }
    }
}

fn print_info(info: &ContactInfo) {
    let personal = &info.personal;

    println!("Email:    {}", personal.email);
    println!("Phone:    {}", personal.phone);
    println!("WhatsApp: {}", personal.whatsapp);
    println!("Location: {}", personal.location);
    for link in &info.social_links {
        println!("{}: {}", link.platform, link.url);
    }
}
