/// Fixed reply issued in place of any generated response when crisis
/// language is detected.
pub const SAFETY_RESOURCE_MESSAGE: &str = "I'm very concerned about what you're sharing, and I want you to know that your safety is the most important thing right now.

Please reach out to one of these resources immediately:

Crisis Resources:
- National Suicide Prevention Lifeline: 988 or 1-800-273-8255 (24/7)
- Crisis Text Line: Text HOME to 741741
- International: findahelpline.com

If you're in immediate danger, please call 911 or go to your nearest emergency room.

You don't have to go through this alone. These trained professionals are ready to help you right now. Would you like to talk about reaching out to them?";
