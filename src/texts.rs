pub const REPORT_TRIGGER: &str = "🚗 የትራፊክ ሁኔታ ሪፖርት አድርግ";
pub const QUESTION_TRIGGER: &str = "🎙️ አስተያየት ለሆስቶች";
pub const ANONYMOUS_REPORT_TRIGGER: &str = "🕵️ በስም አልባነት ሪፖርት አድርግ";

pub const SHARE_PHONE_BUTTON: &str = "📱 ስልክ ቁጥር አካፍል";
pub const DESCRIBE_BY_TEXT_BUTTON: &str = "📝 በጽሁፍ ግለጹ";
pub const DESCRIBE_BY_VOICE_BUTTON: &str = "🎤 በድምጽ መልዕክት ግለጹ";

pub const ASK_PHONE: &str = "እባክዎ ስልክ ቁጥርዎን ያካፍሉ:";
pub const ASK_LOCATION: &str =
    "እባክዎ የትራፊክ ሁኔታው የታየበትን አካባቢ ይጻፉ (ለምሳሌ: ጎተራ, መገናኛ, 4 ኪሎ):";
pub const ASK_DESCRIPTION: &str =
    "አመሰግናለሁ! አሁን እባክዎ የትራፊክ ሁኔታውን በጽሁፍ ወይም በድምጽ መልዕክት ይግለጹ:";
pub const REPORT_SENT: &str = "ሪፖርት ስላደረጉ እናመሰግናለን! ወደ ሆስቶቻችን ተልኳል። 🙏";
pub const QUESTION_SENT: &str = "ጥያቄዎ ወደ ሆስቶቻችን ተልኳል! በፕሮግራሙ ወቅት ምላሽ ይሰጡበታል። 🎙️";
pub const CANCELLED: &str = "ተሰርዟል።";

pub const ANONYMOUS_NAME: &str = "ስም አልባ";
pub const MISSING_USERNAME: &str = "Anonymous";
pub const PHONE_NOT_PROVIDED: &str = "Not provided";
pub const VOICE_PLACEHOLDER: &str = "[የድምጽ መልዕክት]";
