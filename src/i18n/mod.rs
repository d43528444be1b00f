//! Internationalization (i18n) module.
//!
//! Provides localized strings for the application UI and CLI output.
//! English is the default language; Spanish is available as an alternative.
//! The architecture supports adding more languages in the future.

use std::sync::OnceLock;

static CURRENT_LANG: OnceLock<Lang> = OnceLock::new();

/// Supported languages.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Lang {
    /// English (default)
    En,
    /// Spanish
    Es,
}

impl Lang {
    /// Parse a language code string (e.g. "en", "es", "en_US", "es_ES").
    /// Returns `None` for unrecognized codes.
    pub fn from_code(code: &str) -> Option<Self> {
        let normalized = code.to_lowercase();
        let prefix = normalized.split(['_', '-']).next().unwrap_or("");
        match prefix {
            "en" => Some(Self::En),
            "es" => Some(Self::Es),
            _ => None,
        }
    }

    /// Return the ISO 639-1 code for this language.
    pub fn code(self) -> &'static str {
        match self {
            Self::En => "en",
            Self::Es => "es",
        }
    }
}

/// Initialize the global language. Call once at startup.
/// If already initialized, this is a no-op.
pub fn set_lang(lang: Lang) {
    let _ = CURRENT_LANG.set(lang);
}

/// Get the currently configured language (defaults to English).
pub fn lang() -> Lang {
    CURRENT_LANG.get().copied().unwrap_or(Lang::En)
}

/// Detect language from the `LANG` / `LC_MESSAGES` environment variables.
pub fn detect_system_lang() -> Lang {
    std::env::var("OUTBOXSHELL_LANG")
        .ok()
        .and_then(|v| Lang::from_code(&v))
        .or_else(|| {
            std::env::var("LC_MESSAGES")
                .ok()
                .and_then(|v| Lang::from_code(&v))
        })
        .or_else(|| std::env::var("LANG").ok().and_then(|v| Lang::from_code(&v)))
        .unwrap_or(Lang::En)
}

/// Macro for defining translatable message functions.
/// Each function returns a `&'static str` based on the current language.
macro_rules! msg {
    ($name:ident, $en:expr, $es:expr) => {
        /// Returns a localized string for the current language.
        pub fn $name() -> &'static str {
            match lang() {
                Lang::En => $en,
                Lang::Es => $es,
            }
        }
    };
}

// ── General ──────────────────────────────────────────────────────

msg!(app_name, "outboxShell", "outboxShell");
msg!(
    app_about,
    "outboxShell \u{2014} Terminal email composer. Write an email with a rich-text body and described attachments, preview it live, and submit it to your backend as a single multipart request.",
    "outboxShell \u{2014} Compositor de correo para terminal. Escribe un correo con cuerpo enriquecido y adjuntos descritos, previs\u{e1}lo en vivo y env\u{ed}alo a tu backend en una sola petici\u{f3}n multipart."
);
msg!(
    app_long_about,
    "outboxShell \u{2014} Terminal email composer.\nWrite an email with a rich-text body and described attachments,\npreview it live, and submit it to your backend as a single\nmultipart request. Built in Rust.",
    "outboxShell \u{2014} Compositor de correo para terminal.\nEscribe un correo con cuerpo enriquecido y adjuntos descritos,\nprevis\u{e1}lo en vivo y env\u{ed}alo a tu backend en una sola\npetici\u{f3}n multipart. Escrito en Rust."
);
msg!(
    app_after_help,
    "Run without a subcommand to open the interactive composer.",
    "Ejecuta sin subcomando para abrir el compositor interactivo."
);

// ── CLI help strings ─────────────────────────────────────────────

msg!(
    help_verbose,
    "Verbose logging (-v info, -vv debug, -vvv trace)",
    "Registro detallado (-v info, -vv debug, -vvv trace)"
);
msg!(
    help_lang,
    "Language (en, es). Defaults to system locale",
    "Idioma (en, es). Por defecto usa el idioma del sistema"
);
msg!(
    help_endpoint,
    "Backend endpoint URL (overrides config)",
    "URL del endpoint de backend (sobrescribe la configuraci\u{f3}n)"
);
msg!(
    help_cmd_compose,
    "Open the interactive composer (default if no subcommand given)",
    "Abrir el compositor interactivo (por defecto si no se da subcomando)"
);
msg!(
    help_cmd_send,
    "Compose and send an email without opening the TUI",
    "Componer y enviar un correo sin abrir la TUI"
);
msg!(
    help_cmd_completions,
    "Generate shell completions",
    "Generar autocompletado para la shell"
);
msg!(
    help_cmd_manpage,
    "Generate a man page",
    "Generar una p\u{e1}gina de manual"
);
msg!(help_subject, "Subject line", "L\u{ed}nea de asunto");
msg!(
    help_recipients,
    "Comma-separated recipient list (passed to the backend verbatim)",
    "Lista de destinatarios separada por comas (enviada al backend tal cual)"
);
msg!(
    help_body,
    "HTML body given inline",
    "Cuerpo HTML dado en l\u{ed}nea"
);
msg!(
    help_body_file,
    "File containing the HTML body",
    "Fichero con el cuerpo HTML"
);
msg!(
    help_attach,
    "Attach a file (repeatable; order is preserved)",
    "Adjuntar un fichero (repetible; se conserva el orden)"
);
msg!(
    help_description,
    "Description for the Nth attachment (repeatable, pairs by position)",
    "Descripci\u{f3}n del en\u{e9}simo adjunto (repetible, se empareja por posici\u{f3}n)"
);
msg!(help_output_json, "Output as JSON", "Salida en formato JSON");

// ── Submission status ────────────────────────────────────────────

msg!(
    status_sent,
    "Email sent successfully!",
    "\u{a1}Correo enviado correctamente!"
);
msg!(status_error, "Error", "Error");
msg!(
    err_worker_gone,
    "submission worker terminated unexpectedly",
    "el proceso de env\u{ed}o termin\u{f3} inesperadamente"
);
msg!(msg_sending, "Sending\u{2026}", "Enviando\u{2026}");
msg!(
    err_too_many_descriptions,
    "more descriptions than attachments",
    "m\u{e1}s descripciones que adjuntos"
);

// ── Validation hints ─────────────────────────────────────────────

msg!(
    hint_missing_subject,
    "Subject is required",
    "El asunto es obligatorio"
);
msg!(
    hint_missing_recipients,
    "Recipients are required",
    "Los destinatarios son obligatorios"
);
msg!(
    hint_already_in_flight,
    "A submission is already in progress",
    "Ya hay un env\u{ed}o en curso"
);

// ── TUI strings ──────────────────────────────────────────────────

msg!(tui_subject_label, "Subject", "Asunto");
msg!(
    tui_recipients_label,
    "Recipients (comma-separated)",
    "Destinatarios (separados por comas)"
);
msg!(tui_body_label, "Body", "Cuerpo");
msg!(tui_attachments_title, "Attachments", "Adjuntos");
msg!(tui_no_attachments, "No attachments", "Sin adjuntos");
msg!(tui_preview_title, "Preview", "Vista previa");
msg!(tui_recipients_prefix, "Recipients", "Destinatarios");
msg!(tui_no_subject, "(no subject)", "(sin asunto)");
msg!(tui_help_title, "Help", "Ayuda");
msg!(tui_attach_title, "Attach file", "Adjuntar fichero");
msg!(tui_attach_prompt, "Path: ", "Ruta: ");
msg!(tui_image_tag, "[image]", "[imagen]");
msg!(tui_col_filename, "Filename", "Fichero");
msg!(tui_col_type, "Type", "Tipo");
msg!(tui_col_size, "Size", "Tama\u{f1}o");
msg!(tui_col_description, "Description", "Descripci\u{f3}n");
msg!(msg_attached, "Attached", "Adjuntado");
msg!(msg_attachment_removed, "Attachment removed", "Adjunto eliminado");

// ── TUI hints ────────────────────────────────────────────────────

msg!(tui_hint_field, "next field", "campo siguiente");
msg!(tui_hint_nav, "navigate", "navegar");
msg!(tui_hint_attach, "attach", "adjuntar");
msg!(tui_hint_remove, "remove", "eliminar");
msg!(tui_hint_describe, "describe", "describir");
msg!(tui_hint_send, "send", "enviar");
msg!(tui_hint_preview, "preview", "vista previa");
msg!(tui_hint_help, "help", "ayuda");
msg!(tui_hint_quit, "quit", "salir");
msg!(tui_hint_cancel, "cancel", "cancelar");
msg!(tui_hint_confirm, "confirm", "confirmar");
msg!(tui_hint_done, "done", "hecho");

// ── Errors ───────────────────────────────────────────────────────

msg!(
    err_file_not_found,
    "File not found",
    "Fichero no encontrado"
);
