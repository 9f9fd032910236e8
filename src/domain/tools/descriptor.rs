//! Per-tool routing descriptors.
//!
//! Each tool the gateway exposes is described by one row: the request field
//! it requires, the downstream endpoint it forwards to, the shape of its
//! success payload, and the message used when the downstream omits one.
//! The HTTP handlers are a single generic pipeline driven by this table.

/// The five research tools exposed by the gateway.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ToolKind {
    /// Search the web for PDFs matching a query and download them.
    SearchAndDownload,
    /// Convert a previously downloaded PDF into audio files.
    ConvertPdfToAudio,
    /// Turn markdown content into presentation slides.
    ProcessMarkdown,
    /// Fetch academic journal records matching a query.
    FetchJournals,
    /// Open and download academic papers matching a query.
    OpenJournals,
}

/// Shape of the tool-specific field in a success envelope.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SuccessPayload {
    /// `files`: list of generated/downloaded file names.
    Files,
    /// `audio_files`: list of generated audio file names.
    AudioFiles,
    /// `data`: opaque serialized journal records.
    Records,
}

/// One row of the tool routing table.
#[derive(Debug, Clone, Copy)]
pub struct ToolDescriptor {
    /// Tool name as exposed on the HTTP surface.
    pub name: &'static str,
    /// The single request field that must be present and non-empty.
    pub required_field: &'static str,
    /// Downstream endpoint the validated body is forwarded to.
    pub downstream_path: &'static str,
    /// Shape of the success payload field.
    pub payload: SuccessPayload,
    /// Message used when the downstream response omits `message`.
    pub fallback_message: &'static str,
}

impl ToolDescriptor {
    /// Client-facing error for a missing or empty required field.
    pub fn missing_field_error(&self) -> String {
        format!("Missing {} parameter", self.required_field)
    }
}

const SEARCH_AND_DOWNLOAD: ToolDescriptor = ToolDescriptor {
    name: "search_and_download",
    required_field: "query",
    downstream_path: "/search_and_download",
    payload: SuccessPayload::Files,
    fallback_message: "Search and download completed",
};

const CONVERT_PDF_TO_AUDIO: ToolDescriptor = ToolDescriptor {
    name: "convert_pdf_to_audio",
    required_field: "pdf_file",
    downstream_path: "/convert_pdf_to_audio",
    payload: SuccessPayload::AudioFiles,
    fallback_message: "Audio conversion completed",
};

const PROCESS_MARKDOWN: ToolDescriptor = ToolDescriptor {
    name: "process_markdown",
    required_field: "markdown_content",
    downstream_path: "/process_markdown",
    payload: SuccessPayload::Files,
    fallback_message: "Markdown processed and files generated",
};

const FETCH_JOURNALS: ToolDescriptor = ToolDescriptor {
    name: "fetch_journals",
    required_field: "query",
    downstream_path: "/fetch_journals",
    payload: SuccessPayload::Records,
    fallback_message: "Journals fetched",
};

const OPEN_JOURNALS: ToolDescriptor = ToolDescriptor {
    name: "open_journals",
    required_field: "query",
    downstream_path: "/open_journals",
    payload: SuccessPayload::Records,
    fallback_message: "Journals opened",
};

impl ToolKind {
    /// All tools, in the order they appear on the HTTP surface.
    pub const ALL: [ToolKind; 5] = [
        ToolKind::SearchAndDownload,
        ToolKind::ConvertPdfToAudio,
        ToolKind::ProcessMarkdown,
        ToolKind::FetchJournals,
        ToolKind::OpenJournals,
    ];

    /// The routing descriptor for this tool.
    pub fn descriptor(self) -> &'static ToolDescriptor {
        match self {
            ToolKind::SearchAndDownload => &SEARCH_AND_DOWNLOAD,
            ToolKind::ConvertPdfToAudio => &CONVERT_PDF_TO_AUDIO,
            ToolKind::ProcessMarkdown => &PROCESS_MARKDOWN,
            ToolKind::FetchJournals => &FETCH_JOURNALS,
            ToolKind::OpenJournals => &OPEN_JOURNALS,
        }
    }

    /// Tool name as exposed on the HTTP surface.
    pub fn name(self) -> &'static str {
        self.descriptor().name
    }
}
