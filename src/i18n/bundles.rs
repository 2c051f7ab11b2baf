use super::{
    ChatStrings, HomeStrings, InsightStrings, LocaleBundle, NoticeStrings, SensorStrings,
};
use crate::models::Language;

pub(super) static EN: LocaleBundle = LocaleBundle {
    language: Language::En,
    chat: ChatStrings {
        title: "AI Assistant",
        subtitle: "Ask me anything about farming",
        placeholder: "Type your question...",
        send: "Send",
        speak: "Speak",
        change_language: "Change Language",
        examples_title: "Try asking:",
        thinking: "Thinking...",
        welcome: "Hello! I'm KrishiMitra, your AI farming assistant. I can help you with soil health, crop selection, weather insights, and farming best practices. How can I assist you today?",
        examples: &[
            "What is the ideal pH for rice?",
            "How to improve soil moisture?",
            "Best crops for this season?",
        ],
    },
    home: HomeStrings {
        welcome: "Welcome to KrishiMitra",
        dashboard: "Dashboard",
        active_sensors: "Active Sensors",
        farmers: "Farmers Empowered",
        yield_increase: "Avg. Yield Increase",
        savings: "Avg. Annual Savings",
        weather: "Weather Today",
        sensor_status: "Sensor Status",
        alerts: "Alerts",
        view_all: "View All",
    },
    sensors: SensorStrings {
        title: "Sensor Monitoring",
        all_sensors: "All Sensors",
        moisture: "Moisture",
        ph: "pH Level",
        temperature: "Temperature",
        battery: "Battery",
        last_update: "Last Update",
        view_history: "View 7-Day History",
        history: "Historical Data",
    },
    insights: InsightStrings {
        title: "Farm Insights",
        recommendations: "Crop Recommendations",
        yield_prediction: "Yield Prediction",
        current_conditions: "Current Conditions",
        suitability: "Suitability Score",
        season: "Season",
        expected_yield: "Expected Yield",
        market_price: "Market Price",
        view_all: "View All Crops",
        predict_yield: "Predict Yield",
        confidence: "Confidence",
        recommendations_title: "Recommendations",
        language: "Language",
        about: "About KrishiMitra",
        about_text: "KrishiMitra is your AI-powered agricultural assistant, helping farmers make data-driven decisions for better yields and sustainable farming.",
    },
    notices: NoticeStrings {
        error_title: "Error",
        chat_failed: "Failed to get response. Please try again.",
        speech_failed: "Text-to-speech failed",
        busy: "Please wait for the current reply.",
    },
};

pub(super) static TE: LocaleBundle = LocaleBundle {
    language: Language::Te,
    chat: ChatStrings {
        title: "AI సహాయకం",
        subtitle: "వ్యవసాయం గురించి ఏదైనా అడగండి",
        placeholder: "మీ ప్రశ్న టైప్ చేయండి...",
        send: "పంపు",
        speak: "మాట్లాడు",
        change_language: "భాష మార్చు",
        examples_title: "ఇలా అడగండి:",
        thinking: "ఆలోచిస్తోంది...",
        welcome: "హలో! నేను కృషి మిత్ర, మీ AI వ్యవసాయ సహాయకం. నేల ఆరోగ్యం, పంట ఎంపిక, వాతావరణ సమాచారం మరియు వ్యవసాయ ఉత్తమ పద్ధతులతో నేను మీకు సహాయం చేయగలను. ఈరోజు నేను మీకు ఎలా సహాయం చేయగలను?",
        examples: &[
            "వరికి అనువైన pH ఏమిటి?",
            "మట్టి తేమను ఎలా మెరుగుపరచాలి?",
            "ఈ కాలానికి ఉత్తమ పంటలు ఏవి?",
        ],
    },
    home: HomeStrings {
        welcome: "కృషి మిత్రకు స్వాగతం",
        dashboard: "డాష్‌బోర్డ్",
        active_sensors: "సక్రియ సెన్సార్లు",
        farmers: "రైతులకు సహాయం",
        yield_increase: "సగటు దిగుబడి పెరుగుదల",
        savings: "సగటు వార్షిక ఆదా",
        weather: "నేటి వాతావరణం",
        sensor_status: "సెన్సార్ స్థితి",
        alerts: "హెచ్చరికలు",
        view_all: "అన్నీ చూడండి",
    },
    sensors: SensorStrings {
        title: "సెన్సార్ పర్యవేక్షణ",
        all_sensors: "అన్ని సెన్సార్లు",
        moisture: "నమి",
        ph: "pH స్థాయి",
        temperature: "ఉష్ణోగ్రత",
        battery: "బ్యాటరీ",
        last_update: "చివరి అప్‌డేట్",
        view_history: "7-రోజుల చరిత్ర చూడండి",
        history: "చారిత్రిక డేటా",
    },
    insights: InsightStrings {
        title: "వ్యవసాయ అంతర్దృష్టులు",
        recommendations: "పంట సిఫార్సులు",
        yield_prediction: "దిగుబడి అంచనా",
        current_conditions: "ప్రస్తుత పరిస్థితులు",
        suitability: "అనుకూలత స్కోర్",
        season: "కాలం",
        expected_yield: "ఆశించిన దిగుబడి",
        market_price: "మార్కెట్ ధర",
        view_all: "అన్ని పంటలు చూడండి",
        predict_yield: "దిగుబడి అంచనా",
        confidence: "విశ్వాసం",
        recommendations_title: "సిఫార్సులు",
        language: "భాష",
        about: "కృషి మిత్ర గురించి",
        about_text: "కృషి మిత్ర మీ AI-శక్తితో కూడిన వ్యవసాయ సహాయకం, రైతులకు మెరుగైన దిగుబడి మరియు స్థిరమైన వ్యవసాయం కోసం డేటా-ఆధారిత నిర్ణయాలు తీసుకోవడంలో సహాయం చేస్తుంది.",
    },
    notices: NoticeStrings {
        error_title: "లోపం",
        chat_failed: "సమాధానం పొందడంలో విఫలమైంది. దయచేసి మళ్లీ ప్రయత్నించండి.",
        speech_failed: "వచనం నుండి ప్రసంగం విఫలమైంది",
        busy: "దయచేసి ప్రస్తుత సమాధానం కోసం వేచి ఉండండి.",
    },
};

pub(super) static HI: LocaleBundle = LocaleBundle {
    language: Language::Hi,
    chat: ChatStrings {
        title: "AI सहायक",
        subtitle: "खेती के बारे में कुछ भी पूछें",
        placeholder: "अपना प्रश्न टाइप करें...",
        send: "भेजें",
        speak: "बोलें",
        change_language: "भाषा बदलें",
        examples_title: "यह पूछकर देखें:",
        thinking: "सोच रहा है...",
        welcome: "नमस्ते! मैं कृषि मित्र हूं, आपका AI कृषि सहायक। मैं मिट्टी के स्वास्थ्य, फसल चयन, मौसम की जानकारी और खेती की सर्वोत्तम प्रथाओं में आपकी सहायता कर सकता हूं। आज मैं आपकी कैसे सहायता कर सकता हूं?",
        examples: &[
            "चावल के लिए आदर्श pH क्या है?",
            "मिट्टी की नमी कैसे सुधारें?",
            "इस मौसम के लिए सबसे अच्छी फसलें?",
        ],
    },
    home: HomeStrings {
        welcome: "कृषि मित्र में आपका स्वागत है",
        dashboard: "डैशबोर्ड",
        active_sensors: "सक्रिय सेंसर",
        farmers: "सशक्त किसान",
        yield_increase: "औसत उपज वृद्धि",
        savings: "औसत वार्षिक बचत",
        weather: "आज का मौसम",
        sensor_status: "सेंसर स्थिति",
        alerts: "अलर्ट",
        view_all: "सभी देखें",
    },
    sensors: SensorStrings {
        title: "सेंसर निगरानी",
        all_sensors: "सभी सेंसर",
        moisture: "नमी",
        ph: "pH स्तर",
        temperature: "तापमान",
        battery: "बैटरी",
        last_update: "आखिरी अपडेट",
        view_history: "7-दिन का इतिहास देखें",
        history: "एतिहासिक डेटा",
    },
    insights: InsightStrings {
        title: "कृषि अंतर्दृष्टि",
        recommendations: "फसल सिफारिशें",
        yield_prediction: "उपज पूर्वानुमान",
        current_conditions: "वर्तमान स्थितियां",
        suitability: "उपयुक्तता स्कोर",
        season: "मौसम",
        expected_yield: "अपेक्षित उपज",
        market_price: "बाजार मूल्य",
        view_all: "सभी फसलें देखें",
        predict_yield: "उपज पूर्वानुमान",
        confidence: "विश्वास",
        recommendations_title: "सिफारिशें",
        language: "भाषा",
        about: "कृषि मित्र के बारे में",
        about_text: "कृषि मित्र आपका AI-संचालित कृषि सहायक है, जो किसानों को बेहतर उपज और टिकाऊ खेती के लिए डेटा-संचालित निर्णय लेने में मदद करता है।",
    },
    notices: NoticeStrings {
        error_title: "त्रुटि",
        chat_failed: "जवाब प्राप्त करने में विफल। कृपया पुनः प्रयास करें।",
        speech_failed: "टेक्स्ट-टू-स्पीच विफल रहा",
        busy: "कृपया वर्तमान उत्तर की प्रतीक्षा करें।",
    },
};
